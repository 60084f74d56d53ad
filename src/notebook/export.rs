use std::io::{
    self,
    Write
};

use nalgebra::{
    Point2,
    Point3
};

use crate::math::ode::odesystem::Trajectory;

pub fn write_curve_csv<W: Write>(writer: &mut W, points: &[Point2<f64>]) -> io::Result<()> {
    writeln!(writer, "x,y")?;
    for p in points {
        writeln!(writer, "{},{}", p.x, p.y)?;
    }
    Ok(())
}

/// One line per mesh vertex, tagged with its (row, column) position.
pub fn write_surface_csv<W: Write>(writer: &mut W, mesh: &[Vec<Point3<f64>>]) -> io::Result<()> {
    writeln!(writer, "i,j,x,y,z")?;
    for (i, row) in mesh.iter().enumerate() {
        for (j, p) in row.iter().enumerate() {
            writeln!(writer, "{},{},{},{},{}", i, j, p.x, p.y, p.z)?;
        }
    }
    Ok(())
}

pub fn write_population_csv<W: Write>(writer: &mut W, trajectory: &Trajectory<2>) -> io::Result<()> {
    writeln!(writer, "t,prey,predator")?;
    for (t, state) in trajectory.iter() {
        writeln!(writer, "{},{},{}", t, state[0], state[1])?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use super::*;

    #[test]
    fn test_curve_csv() {
        let mut buffer = Vec::new();
        write_curve_csv(&mut buffer, &[Point2::new(0.0, 1.0), Point2::new(2.5, -1.0)]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "x,y\n0,1\n2.5,-1\n");
    }

    #[test]
    fn test_surface_csv_indices() {
        let mesh = vec![
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![Point3::new(2.0, 0.5, 0.0), Point3::new(2.0, -0.5, 0.0)]
        ];
        let mut buffer = Vec::new();
        write_surface_csv(&mut buffer, &mesh).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "1,1,2,-0.5,0");
    }

    #[test]
    fn test_population_csv() {
        let trajectory = Trajectory::new(vec![0.0, 0.5], vec![Vector2::new(10.0, 5.0), Vector2::new(11.0, 4.5)]);
        let mut buffer = Vec::new();
        write_population_csv(&mut buffer, &trajectory).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "t,prey,predator\n0,10,5\n0.5,11,4.5\n");
    }
}
