//! Diagnostic snapshot of the active build's resolved layout.
//!
//! Human/bug-report facing only: nothing is ever loaded back from a dump,
//! and the tables stay compiled-in constants.

use std::fs;
use std::path::Path;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::info;

use crate::module::ModuleBases;
use crate::offset::{AddressResolver, HostModule};

/// Rendering of an address column when resolution fails.
const UNRESOLVED: &str = "unresolved";

/// Resolved layout snapshot in hex-string form.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutDump {
    pub version: String,
    pub modules: Vec<ModuleDump>,
    pub symbols: Vec<SymbolDump>,
}

/// One host module and its base for the current process run.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDump {
    pub module: String,
    pub file: String,
    pub base: String,
}

/// One symbol row: static offset plus, if its module is loaded, the rebased
/// absolute address.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolDump {
    pub symbol: String,
    pub module: String,
    pub offset: String,
    pub address: String,
}

impl LayoutDump {
    /// Capture a snapshot against the resolver's tables and module source.
    ///
    /// Symbols whose module is not loaded render as `unresolved` instead of
    /// failing the whole dump.
    pub fn capture<M: ModuleBases>(resolver: &AddressResolver<'_, M>) -> Self {
        let tables = resolver.tables();

        let modules = HostModule::iter()
            .map(|module| ModuleDump {
                module: module.to_string(),
                file: crate::module::display_name(tables.module_file(module)).to_string(),
                base: match resolver.module_base(module) {
                    Ok(base) => format!("0x{:X}", base.0),
                    Err(_) => "not loaded".to_string(),
                },
            })
            .collect();

        let symbols = tables
            .offsets
            .entries
            .iter()
            .map(|entry| SymbolDump {
                symbol: entry.symbol.to_string(),
                module: entry.module.to_string(),
                offset: format!("0x{:X}", entry.offset),
                address: match resolver.resolve(entry.symbol) {
                    Ok(address) => format!("0x{:X}", address.0),
                    Err(_) => UNRESOLVED.to_string(),
                },
            })
            .collect();

        Self {
            version: tables.version.to_string(),
            modules,
            symbols,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot to `path` as pretty JSON.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        fs::write(&path, self.to_json()?)?;
        info!("saved layout dump to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::MockModules;
    use crate::version::VersionTables;

    fn full_mock() -> MockModules {
        let tables = VersionTables::active();
        let mut modules = MockModules::with_executable_base(0x7ff6_0000_0000);
        modules.insert(Some(tables.modules.guard), 0x7ffa_1000_0000);
        modules
    }

    #[test]
    fn test_capture_renders_every_symbol() {
        let modules = full_mock();
        let resolver = AddressResolver::for_active_build(&modules);
        let dump = LayoutDump::capture(&resolver);

        assert_eq!(dump.version, VersionTables::active().version);
        assert_eq!(dump.symbols.len(), VersionTables::active().offsets.entries.len());
        assert!(dump.symbols.iter().all(|row| row.address.starts_with("0x")));
    }

    #[test]
    fn test_capture_survives_an_unloaded_module() {
        // Guard DLL missing: its symbols degrade, the rest still resolve.
        let modules = MockModules::with_executable_base(0x7ff6_0000_0000);
        let resolver = AddressResolver::for_active_build(&modules);
        let dump = LayoutDump::capture(&resolver);

        let bitmap = dump
            .symbols
            .iter()
            .find(|row| row.symbol == "guard.page_bitmap")
            .unwrap();
        assert_eq!(bitmap.address, UNRESOLVED);

        let print = dump
            .symbols
            .iter()
            .find(|row| row.symbol == "process.print")
            .unwrap();
        assert!(print.address.starts_with("0x"));
    }

    #[test]
    fn test_dump_round_trips_through_a_file() {
        let modules = full_mock();
        let resolver = AddressResolver::for_active_build(&modules);
        let dump = LayoutDump::capture(&resolver);

        let file = tempfile::NamedTempFile::new().unwrap();
        dump.save_to_path(file.path()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains(VersionTables::active().version));
        assert!(written.contains("guard.page_bitmap"));
    }
}
