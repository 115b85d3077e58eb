//! OS-backed module lookup.

use tracing::debug;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::core::HSTRING;

use super::{ModuleBases, display_name};
use crate::address::ModuleBase;
use crate::error::{Error, Result};

/// Module-base source backed by the running process's loader state.
///
/// The lookup is a single `GetModuleHandleW` call. The loader owns the
/// module; no reference count is taken, and the returned base stays valid
/// until the module is unloaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderModules;

impl ModuleBases for LoaderModules {
    fn base_of(&self, name: Option<&str>) -> Result<ModuleBase> {
        let handle = match name {
            // SAFETY: queries loader state for the current process only; no
            // ownership of the module is taken.
            None => unsafe { GetModuleHandleW(None) },
            Some(file) => {
                let wide = HSTRING::from(file);
                // SAFETY: as above; `wide` outlives the call.
                unsafe { GetModuleHandleW(&wide) }
            }
        };

        match handle {
            Ok(module) if !module.is_invalid() => Ok(ModuleBase(module.0 as u64)),
            Ok(_) => Err(Error::ModuleNotFound(display_name(name).to_string())),
            Err(os) => {
                debug!(module = display_name(name), error = %os, "module lookup failed");
                Err(Error::ModuleNotFound(display_name(name).to_string()))
            }
        }
    }
}
