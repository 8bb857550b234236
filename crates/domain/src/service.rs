use std::collections::BTreeMap;

use log::{debug, error};
use rand::Rng;

use crate::{
    CatalogRepository, Exercise, ExerciseID, ExerciseService, ReadError, StorageError,
    UserProfile, WorkoutPlan, WorkoutRequest, WorkoutService, resolve_alternatives,
};

pub struct Service<R> {
    repository: R,
}

impl<R: CatalogRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn read_catalog(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(resolve_alternatives(self.repository.read_exercises().await?))
    }

    async fn find_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        self.read_catalog()
            .await?
            .into_iter()
            .find(|e| e.id == *id)
            .ok_or(ReadError::Storage(StorageError::NotFound))
    }

    async fn find_alternatives(&self, id: &ExerciseID) -> Result<Vec<Exercise>, ReadError> {
        let exercises = self
            .read_catalog()
            .await?
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect::<BTreeMap<_, _>>();
        let exercise = exercises
            .get(id)
            .ok_or(ReadError::Storage(StorageError::NotFound))?;
        Ok(exercise
            .alternatives(&exercises)
            .into_iter()
            .cloned()
            .collect())
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NotFound) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(self.read_catalog(), ReadError, "get", "exercises")
    }

    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        log_on_error!(self.find_exercise(id), ReadError, "get", "exercise")
    }

    async fn get_alternatives(&self, id: &ExerciseID) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.find_alternatives(id),
            ReadError,
            "get",
            "alternatives"
        )
    }
}

impl<R: CatalogRepository> WorkoutService for Service<R> {
    async fn generate_workout<G: Rng + ?Sized>(
        &self,
        request: &WorkoutRequest,
        profile: &UserProfile,
        rng: &mut G,
    ) -> Result<WorkoutPlan, ReadError> {
        let exercises = log_on_error!(self.read_catalog(), ReadError, "get", "exercises")?;
        let plan =
            crate::generate_workout(request, &exercises, rng).with_weights(&exercises, profile);

        debug!(
            "generated {} workout with {} exercises and {} sets ({} min)",
            plan.phase,
            plan.exercises.len(),
            plan.set_count(),
            plan.estimated_duration
        );

        Ok(plan)
    }
}
