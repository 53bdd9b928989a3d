pub use serde::{Deserialize, Serialize};

pub use std::fmt;

pub use ndarray::array;
pub use ndarray::prelude::*;
pub use ndarray_rand::rand::Rng;
pub use ndarray_rand::rand_distr::Uniform;
pub use ndarray_rand::RandomExt;

pub use crate::config::*;
pub use crate::cost::*;
pub use crate::data::*;
pub use crate::error::{Result, TrainError};
pub use crate::model::*;
pub use crate::optimizers::*;
pub use crate::propagation::*;
pub use crate::report::*;
pub use crate::target::*;
pub use crate::trainer::*;

pub use crate::neuron;
