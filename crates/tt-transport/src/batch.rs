//! Parallel evaluation of many independent states.

use rayon::prelude::*;
use tracing::debug;
use tt_fluids::{FluidState, UpdatableState};
use tt_solver::NewtonConfig;

use crate::data::TransportData;
use crate::error::TransportResult;
use crate::model::{ReferenceFluid, TransportModel, TransportProperties};

/// Reference fluid template for [`evaluate_batch`]; every worker evaluates on
/// its own clone of `state`.
pub struct BatchReference<'a, R> {
    pub state: &'a R,
    pub data: &'a TransportData,
}

/// Evaluate `states` of the fluid described by `data` in parallel.
///
/// Results keep the order of `states`; a failing point does not stop the others.
pub fn evaluate_batch<S, R>(
    data: &TransportData,
    reference: Option<BatchReference<'_, R>>,
    states: &[S],
    config: &NewtonConfig,
) -> Vec<TransportResult<TransportProperties>>
where
    S: FluidState,
    R: UpdatableState + Clone,
{
    debug!(points = states.len(), "evaluating transport batch");
    states
        .par_iter()
        .map_init(
            || reference.as_ref().map(|r| (r.state.clone(), r.data)),
            |scratch, state| {
                let mut model = TransportModel::new(data).with_solver_config(*config);
                if let Some((reference_state, reference_data)) = scratch.as_mut() {
                    model = model.with_reference(ReferenceFluid {
                        state: reference_state,
                        data: *reference_data,
                    });
                }
                model.evaluate(state)
            },
        )
        .collect()
}
