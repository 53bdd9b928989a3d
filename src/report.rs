use log::info;

use crate::prelude::*;

/// Input used for the sample prediction printed after training.
pub const SAMPLE_INPUT: f64 = 70.;

/// Everything the binary prints after a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub cost_before: f64,
    pub cost_after: f64,
    pub model: Neuron,
    pub eval_cost: f64,
    pub sample_input: f64,
    pub sample_prediction: f64,
    pub sample_target: f64,
}

impl Report {
    pub fn new(model: Neuron, history: &CostHistory, eval_cost: f64) -> Result<Self> {
        let (Some(cost_before), Some(cost_after)) = (history.first(), history.last()) else {
            return Err(TrainError::EmptyHistory);
        };
        Ok(Self {
            cost_before,
            cost_after,
            model,
            eval_cost,
            sample_input: SAMPLE_INPUT,
            sample_prediction: model.predict(SAMPLE_INPUT),
            sample_target: target(SAMPLE_INPUT),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cost before the training: {}", self.cost_before)?;
        writeln!(f, "Cost after the training: {}", self.cost_after)?;
        writeln!(f, "Neuron parameters: {}", self.model)?;
        writeln!(f, "Cost on new testing data: {}", self.eval_cost)?;
        writeln!(
            f,
            "Neuron \"thinks\" that {} °C in Fahrenheit is: {}",
            self.sample_input, self.sample_prediction
        )?;
        write!(f, "Correct answer is: {}", self.sample_target)
    }
}

/// Builds both data sets, draws the initial neuron from `rng`, trains it and
/// evaluates the result on the held-out set.
pub fn run<R: Rng + ?Sized>(config: &TrainingConfig, rng: &mut R) -> Result<Report> {
    let trainer = Trainer::new(config.clone())?;
    let train_set = generate(config.train_start, config.batch_size);
    let eval_set = generate(config.eval_start, config.batch_size);

    let mut model = Neuron::random(rng);
    info!("initial neuron: {model}");

    let history = trainer.fit(&mut model, &train_set)?;
    let eval_cost = evaluate(&model, &eval_set)?;
    info!("trained neuron: {model}, eval cost: {eval_cost}");

    Report::new(model, &history, eval_cost)
}
