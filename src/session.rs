use std::collections::HashMap;

use anyhow::Result;
use log::debug;

use crate::tiger::TigerHash;
use crate::tree::Tth;

/// Registry of open contexts addressed by string tokens (`tth0`, `tth1`, ...).
///
/// A context lives from [`init`](Sessions::init) until it is digested or
/// removed. Tokens are never reused within one registry.
#[derive(Debug, Default)]
pub struct Sessions {
    contexts: HashMap<String, Tth>,
    uid: u64,
}

impl Sessions {
    /// Creates an empty registry.
    pub fn new() -> Sessions {
        Sessions::default()
    }

    /// Opens a new empty context and returns its token.
    pub fn init(&mut self) -> String {
        self.insert(Tth::new())
    }

    /// Opens a copy of the context named `token` and returns the new token.
    pub fn fork(&mut self, token: &str) -> Result<String> {
        let ctx = self.find(token)?.clone();
        Ok(self.insert(ctx))
    }

    /// Appends `data` to the context named `token`.
    pub fn update(&mut self, token: &str, data: &[u8]) -> Result<()> {
        self.find(token)?.update(data);
        Ok(())
    }

    /// Finalizes the context named `token`. The token is released.
    pub fn digest(&mut self, token: &str) -> Result<TigerHash> {
        let ctx = self
            .contexts
            .remove(token)
            .ok_or_else(|| anyhow!("can not find context named \"{}\"", token))?;
        debug!("{} finalized after {} bytes", token, ctx.len());
        Ok(ctx.digest())
    }

    /// Drops the context named `token` without digesting it.
    pub fn remove(&mut self, token: &str) -> bool {
        self.contexts.remove(token).is_some()
    }

    /// Returns number of open contexts.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns `true` if no context is open.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    fn find(&mut self, token: &str) -> Result<&mut Tth> {
        self.contexts
            .get_mut(token)
            .ok_or_else(|| anyhow!("can not find context named \"{}\"", token))
    }

    fn insert(&mut self, ctx: Tth) -> String {
        let token = format!("tth{}", self.uid);
        self.uid += 1;

        let prev = self.contexts.insert(token.clone(), ctx);
        assert!(prev.is_none(), "context \"{}\" stomps on existing one", token);

        debug!("{} opened", token);
        token
    }
}
