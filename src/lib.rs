// chemistry module
pub mod chemistry {
    pub mod constants;
    pub mod elements;
    pub mod sum_formula;
    pub mod tolerance;
}

// lipid module
pub mod lipid {
    pub mod classes;
    pub mod ionization;
    pub mod modification;
}

// database module
pub mod database {
    pub mod candidate;
    pub mod generator;
    pub mod interference;
    pub mod kendrick;
}

pub mod error;
