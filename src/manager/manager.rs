use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use serde::Deserialize;
use serde_json;

use super::managererror::ManagerError;


/// Name-keyed registry of cloneable values.
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name).map_or(
            Err(ManagerError::map_elem_not_found(name)),
            |elem| Ok(elem.clone())
        )
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn insert(&self, name: &str, value: V) {
        self.map().insert(name.to_owned(), value);
    }

    /// Registered names in lexical order.
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }
}


/// A registry whose entries can be built from JSON objects carrying a `name` field.
pub trait IJsonManager<V>: IManager<V> where
    V: Clone {
    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(&str, serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    /// `get_obj_from_json` receives the entry's name so validation errors can point at it,
    /// and the JSON object with its `name` key already removed.
    pub fn new(get_obj_from_json: fn(&str, serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }
}

impl <V> IJsonManager<V> for Manager<V> where
    V: Clone {
    fn insert_obj_from_json(&self, mut json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        if self.contains(&named_object.name) {
            return Err(ManagerError::invalid_setting(&named_object.name, "duplicate name"));
        }
        if let Some(object) = json_value.as_object_mut() {
            object.remove("name");
        }
        let v = (self.get_obj_from_json)(&named_object.name, json_value)?;
        self.insert(&named_object.name, v);
        Ok(())
    }
}
