use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Plan, PlanState},
    error::PlanError,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compute_route(&self) -> Result<Plan, PlanError> {
        // the snapshot and the run id are taken together
        let (run, legs) = {
            let store = self.store.lock().await;
            let mut state = self.state.lock().await;

            let run = self.next_generation();
            let legs = store.ordered_pairs();

            *state = PlanState::Requesting {
                run,
                legs: legs.len(),
            };

            (run, legs)
        };

        tracing::info!("run {} started with {} legs", run, legs.len());

        let result = self.planner.plan(run, legs).await;

        let store = self.store.lock().await;
        let mut state = self.state.lock().await;

        if !self.is_current(run) {
            tracing::info!("run {} finished after being superseded, discarding", run);
            return Err(PlanError::Superseded { run });
        }

        match &result {
            Ok(plan) => {
                self.render(&store, Some(plan));
                *state = PlanState::Succeeded { plan: plan.clone() };

                tracing::info!(
                    "run {} published: {} legs, {:.0} m",
                    run,
                    plan.leg_count(),
                    plan.distance_meters()
                );
            }
            Err(err) => {
                self.render(&store, None);
                *state = PlanState::Failed {
                    run,
                    error: err.clone(),
                };

                tracing::warn!("run {} failed: {}", run, err);
            }
        }

        result
    }

    async fn plan_state(&self) -> PlanState {
        self.state.lock().await.clone()
    }
}
