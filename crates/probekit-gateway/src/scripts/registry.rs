use std::collections::HashMap;

use crate::config::ExporterConfig;

/// Executable plus static arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split a configured command on spaces. Empty segments (double spaces)
    /// are skipped. Returns `None` for a blank command.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(' ').filter(|p| !p.is_empty()).map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// Script name -> command line. Exact, case-sensitive lookup.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: HashMap<String, CommandLine>,
}

impl ScriptRegistry {
    pub fn from_config(cfg: &ExporterConfig) -> Self {
        let mut scripts = HashMap::with_capacity(cfg.scripts.len());
        for s in &cfg.scripts {
            match CommandLine::parse(&s.script) {
                Some(cmd) => {
                    scripts.insert(s.name.clone(), cmd);
                }
                None => tracing::warn!(script = %s.name, "skipping script with empty command"),
            }
        }
        Self { scripts }
    }

    /// `None` for empty or unknown names.
    pub fn resolve(&self, name: &str) -> Option<&CommandLine> {
        if name.is_empty() {
            return None;
        }
        self.scripts.get(name)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}
