use crate::error::check_len;
use crate::prelude::*;

/// Paired inputs and labels of one batch. Index `i` of `inputs` belongs to
/// index `i` of `labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    inputs: Array1<f64>,
    labels: Array1<f64>,
}

#[derive(Deserialize)]
struct RawDataset {
    inputs: Array1<f64>,
    labels: Array1<f64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = TrainError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Self::new(raw.inputs, raw.labels)
    }
}

impl Dataset {
    pub fn new(inputs: Array1<f64>, labels: Array1<f64>) -> Result<Self> {
        check_len("labels", labels.len(), inputs.len())?;
        Ok(Self { inputs, labels })
    }

    pub fn inputs(&self) -> &Array1<f64> {
        &self.inputs
    }

    pub fn labels(&self) -> &Array1<f64> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Builds `count` points `start, start + 1, ...` labelled by [`target`].
///
/// Calling it with the same arguments always yields the same data; two calls
/// whose `start` differs by a non-integer offset never share an input.
pub fn generate(start: f64, count: usize) -> Dataset {
    let inputs = Array1::from_iter((0..count).map(|i| start + i as f64));
    let labels = inputs.mapv(target);
    Dataset { inputs, labels }
}
