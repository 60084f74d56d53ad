pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod grid;

    pub mod series {
        pub mod termfunction;
        pub mod functionprovider;
        pub mod seriesevaluator;
        pub mod seriestable;
    }

    pub mod curve {
        pub mod curve;
        pub mod spiral;
    }

    pub mod surface {
        pub mod surface;
        pub mod loghorn;
    }

    pub mod ode {
        pub mod odeerror;
        pub mod odesystem;
        pub mod adaptivesolver;
        pub mod lotkavolterra;
    }
}

pub mod notebook {
    pub mod seriessetting;
    pub mod spiralsetting;
    pub mod loghornsetting;
    pub mod lotkavolterrasetting;
    pub mod export;
}
