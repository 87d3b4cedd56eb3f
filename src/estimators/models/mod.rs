mod linear;
mod logistic;

pub use linear::{fit_ols, linear_predictor};
pub use logistic::{fit_logistic, predict_probabilities};
