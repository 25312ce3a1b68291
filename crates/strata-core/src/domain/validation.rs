use crate::domain::{
    entities::{ModuleStructure, ModulesConfig},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ModulesConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_module_structure(structure: &ModuleStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_with_qualified_path_is_rejected() {
        let mut config = ModulesConfig::default();
        config
            .paths
            .insert("model".into(), "app/Modules/Blog/Models".into());
        let result = DomainValidator::validate_config(&config);
        assert!(matches!(result, Err(DomainError::DuplicatedSegment { .. })));
    }

    #[test]
    fn default_config_passes() {
        assert!(DomainValidator::validate_config(&ModulesConfig::default()).is_ok());
    }
}
