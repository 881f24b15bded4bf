use std::collections::HashMap;
use std::sync::{
    Arc,
    PoisonError,
    RwLock
};

use serde::{
    Serialize,
    Deserialize
};

use crate::aggregation::duboispradeintersection::DuboisPradeIntersection;
use crate::aggregation::norm::Norm;
use crate::aggregation::parametricfactory::{
    ParameterSpec,
    ParametricFactory
};
use crate::aggregation::standardnorm::StandardNorm;
use crate::fuzzyerror::{
    FuzzyError,
    Result
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormOperator {
    DuboisPrade,
    Minimum,
    Product,
    Lukasiewicz,
    Drastic,
    Maximum,
    ProbabilisticSum,
    BoundedSum,
    DrasticSum,
}

impl NormOperator {
    fn standard(self) -> Option<StandardNorm> {
        match self {
            NormOperator::DuboisPrade => None,
            NormOperator::Minimum => Some(StandardNorm::Minimum),
            NormOperator::Product => Some(StandardNorm::Product),
            NormOperator::Lukasiewicz => Some(StandardNorm::Lukasiewicz),
            NormOperator::Drastic => Some(StandardNorm::Drastic),
            NormOperator::Maximum => Some(StandardNorm::Maximum),
            NormOperator::ProbabilisticSum => Some(StandardNorm::ProbabilisticSum),
            NormOperator::BoundedSum => Some(StandardNorm::BoundedSum),
            NormOperator::DrasticSum => Some(StandardNorm::DrasticSum),
        }
    }
}

/// JSON description of a named norm, e.g.
/// `{"name": "dp", "operator": "dubois_prade", "parameters": [0.3], "dual": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormConfig {
    name: String,
    operator: NormOperator,
    #[serde(default)]
    parameters: Vec<f64>,
    #[serde(default)]
    dual: bool
}

impl NormConfig {
    pub fn new(name: String, operator: NormOperator, parameters: Vec<f64>, dual: bool) -> NormConfig {
        NormConfig { name, operator, parameters, dual }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn operator(&self) -> NormOperator {
        self.operator
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn dual(&self) -> bool {
        self.dual
    }

    pub fn generate(&self) -> Result<Arc<dyn Norm>> {
        let norm: Arc<dyn Norm> = match self.operator.standard() {
            Some(standard) => {
                ParameterSpec::none().validate(&standard.to_string(), &self.parameters)?;
                Arc::new(standard)
            }
            None => Arc::new(DuboisPradeIntersection::FACTORY.create(&self.parameters)?),
        };
        Ok(if self.dual { norm.duality() } else { norm })
    }
}

/// Named registry of norms, filled programmatically or from JSON values.
#[derive(Debug, Default)]
pub struct NormManager {
    map_lock: RwLock<HashMap<String, Arc<dyn Norm>>>
}

impl NormManager {
    pub fn new() -> NormManager {
        NormManager::default()
    }

    pub fn insert(&self, name: String, norm: Arc<dyn Norm>) {
        tracing::debug!(%name, %norm, "registered norm");
        self.map_lock
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, norm);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Norm>> {
        self.map_lock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| FuzzyError::UnknownNorm(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map_lock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map_lock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.map_lock.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<()> {
        let config: NormConfig = serde_json::from_value(json_value)?;
        let norm = config.generate()?;
        self.insert(config.name, norm);
        Ok(())
    }

    /// Stops at the first invalid entry; entries before it stay registered.
    pub fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<()> {
        for json_value in json_vec {
            self.insert_obj_from_json(json_value.clone())?;
        }
        Ok(())
    }

    /// Accepts either a single config object or an array of them.
    pub fn insert_obj_from_str(&self, json_str: &str) -> Result<()> {
        let json_value: serde_json::Value = serde_json::from_str(json_str)?;
        match json_value {
            serde_json::Value::Array(json_vec) => self.insert_obj_from_json_vec(&json_vec),
            json_value => self.insert_obj_from_json(json_value),
        }
    }
}
