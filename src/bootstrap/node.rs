//! Bootstrap through a Node.js package entry point

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{Bootstrap, BootstrapContext};
use crate::error::{BoxedCause, Result, fs::read_failed, install::entry_point_not_found};
use crate::package_manager::ToolProbe;
use crate::process::{CommandExecutor, Invocation, OutputMode};

const NODE: &str = "node";
const DEFAULT_ENTRY: &str = "index.js";

/// Requires the entry point and calls its export as `fn(dir, { verbose })`.
/// The export may be the module itself or its `default`. A rejected promise,
/// a thrown error or a literal `false` result exits non-zero.
const LOADER: &str = r#"const [entry, dir, verbose] = process.argv.slice(1);
Promise.resolve()
  .then(() => {
    const mod = require(entry);
    const init = typeof mod === 'function' ? mod : mod && mod.default;
    if (typeof init !== 'function') {
      throw new Error(`${entry} does not export an init function`);
    }
    return init(dir, { verbose: verbose === 'true' });
  })
  .then(result => {
    if (result === false) {
      process.exit(1);
    }
  })
  .catch(err => {
    console.error((err && err.stack) || String(err));
    process.exit(1);
  });
"#;

#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    main: Option<String>,
}

/// Runs the default export of `node_modules/<package>` with Node.js
///
/// `node` is resolved through the same [`ToolProbe`] as the package
/// managers, so the spawned path is the one the lookup found.
pub struct NodeEntryPoint<'a> {
    package: String,
    probe: &'a dyn ToolProbe,
    executor: &'a dyn CommandExecutor,
}

impl<'a> NodeEntryPoint<'a> {
    pub fn new(
        package: impl Into<String>,
        probe: &'a dyn ToolProbe,
        executor: &'a dyn CommandExecutor,
    ) -> Self {
        Self {
            package: package.into(),
            probe,
            executor,
        }
    }

    /// Locate the package's entry point under `target_dir/node_modules`
    pub fn resolve_entry_point(&self, target_dir: &Path) -> Result<PathBuf> {
        let package_dir = target_dir.join("node_modules").join(&self.package);
        let main = read_main(&package_dir)?;
        let declared = package_dir.join(main.as_deref().unwrap_or(DEFAULT_ENTRY));

        // Same lookup order Node uses for a `main` without an extension.
        let candidates = [
            declared.clone(),
            declared.with_extension("js"),
            declared.join(DEFAULT_ENTRY),
        ];
        candidates
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| entry_point_not_found(&declared))
    }

    fn invocation(&self, node: PathBuf, entry: &Path, ctx: &BootstrapContext) -> Invocation {
        Invocation::new(
            node,
            [
                "-e".to_string(),
                LOADER.to_string(),
                entry.display().to_string(),
                ctx.target_dir.display().to_string(),
                ctx.options.verbose.to_string(),
            ],
        )
        .current_dir(&ctx.target_dir)
        .output(OutputMode::Inherit)
    }
}

impl Bootstrap for NodeEntryPoint<'_> {
    fn name(&self) -> &str {
        &self.package
    }

    fn bootstrap(&self, ctx: &BootstrapContext) -> std::result::Result<(), BoxedCause> {
        let entry = self.resolve_entry_point(&ctx.target_dir)?;
        let node = self
            .probe
            .probe(NODE)?
            .unwrap_or_else(|| PathBuf::from(NODE));
        debug!(
            package = %self.package,
            entry = %entry.display(),
            node = %node.display(),
            "running bootstrap"
        );

        let result = self.executor.execute(&self.invocation(node, &entry, ctx))?;
        if !result.success() {
            let status = result
                .exit_code
                .map(|code| format!("exit code {code}"))
                .unwrap_or_else(|| "a signal".to_string());
            return Err(format!("{} exited with {status}", entry.display()).into());
        }

        Ok(())
    }
}

/// Read the `main` field of the package's own `package.json`, if any
fn read_main(package_dir: &Path) -> Result<Option<String>> {
    let descriptor = package_dir.join("package.json");
    if !descriptor.is_file() {
        return Ok(None);
    }
    let json = fs::read_to_string(&descriptor).map_err(|e| read_failed(&descriptor, e))?;
    let parsed: PackageDescriptor =
        serde_json::from_str(&json).map_err(|e| read_failed(&descriptor, e))?;
    Ok(parsed.main.filter(|main| !main.trim().is_empty()))
}
