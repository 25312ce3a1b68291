//! Stubs compiled into the binary.

use strata_core::{
    application::{ApplicationError, ports::StubStore},
    error::StrataResult,
};

macro_rules! stub {
    ($id:literal) => {
        ($id, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/stubs/", $id)))
    };
}

/// Every built-in stub, scaffold stubs first.
const STUBS: &[(&str, &str)] = &[
    stub!("scaffold/provider.stub"),
    stub!("scaffold/config.stub"),
    stub!("scaffold/routes/web.stub"),
    stub!("scaffold/routes/api.stub"),
    stub!("scaffold/routes/console.stub"),
    stub!("controller.stub"),
    stub!("request.stub"),
    stub!("resource.stub"),
    stub!("middleware.stub"),
    stub!("class.stub"),
    stub!("interface.stub"),
    stub!("event.stub"),
    stub!("listener.stub"),
    stub!("model.stub"),
    stub!("repository.stub"),
    stub!("seeder.stub"),
    stub!("factory.stub"),
    stub!("tests/unit.stub"),
    stub!("tests/feature.stub"),
];

/// Default stubs shipped with Strata.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubs;

impl BuiltinStubs {
    pub fn new() -> Self {
        Self
    }

    /// Stub text without the `Result` wrapper.
    pub fn lookup(id: &str) -> Option<&'static str> {
        STUBS
            .iter()
            .find(|(stub_id, _)| *stub_id == id)
            .map(|(_, content)| *content)
    }
}

impl StubStore for BuiltinStubs {
    fn get(&self, id: &str) -> StrataResult<String> {
        Self::lookup(id)
            .map(str::to_string)
            .ok_or_else(|| ApplicationError::StubNotFound { id: id.to_string() }.into())
    }

    fn ids(&self) -> Vec<String> {
        STUBS.iter().map(|(id, _)| (*id).to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::domain::ModulesConfig;

    #[test]
    fn every_configured_stub_is_built_in() {
        let config = ModulesConfig::default();
        for id in config.stubs.values().chain(config.stubs_scaffold.values()) {
            assert!(BuiltinStubs::lookup(id).is_some(), "missing built-in stub {id}");
        }
    }

    #[test]
    fn unknown_stub_is_not_found() {
        let err = BuiltinStubs.get("nope.stub").unwrap_err();
        assert!(err.to_string().contains("nope.stub"));
    }

    #[test]
    fn class_stubs_use_namespace_and_class_placeholders() {
        for id in ["controller.stub", "class.stub", "scaffold/provider.stub"] {
            let stub = BuiltinStubs::lookup(id).unwrap();
            assert!(stub.contains("{{ namespace }}"), "{id}");
            assert!(stub.contains("{{ class }}"), "{id}");
        }
    }
}
