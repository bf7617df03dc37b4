use crate::registry::NationalIdRegistry;
use crate::{Country, Labels, NO_LABEL};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RegistryConfig {
    /// Countries the registry answers for. `None` enables every supported country.
    #[serde(default)]
    pub countries: Option<Vec<Country>>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl RegistryConfig {
    pub fn new() -> Self {
        RegistryConfig {
            countries: None,
            labels: NO_LABEL,
        }
    }

    pub fn countries(&self, countries: Vec<Country>) -> Self {
        self.mutate_clone(|x| x.countries = Some(countries))
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> NationalIdRegistry {
        NationalIdRegistry::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
