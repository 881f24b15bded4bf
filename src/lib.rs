pub mod aggregation {
    pub mod norm;
    pub mod parametricfactory;
    pub mod demorganduality;
    pub mod duboispradeintersection;
    pub mod standardnorm;
    pub mod normmanager;
}

pub mod fuzzyerror;

pub mod sets {
    pub mod point;
    pub mod fuzzyfunction;
    pub mod pointslinearfunction;
}

pub mod util {
    pub mod nonfinitefloat;
    pub mod parameters;
    pub mod simpleinterval;
}
