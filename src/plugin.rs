use std::fmt::{self, Display};

use input_event::KeyEvent;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

use crate::{build, chord::Verdict, config::LOG_TARGET, hook::InputHook};

/// plugin ABI version this plugin is built against
pub const API_VERSION: u32 = 1;

/// id handed out by the host for a registered input hook,
/// negative on failure
pub type HookId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum PluginType {
    /// entry in the launcher menu
    Menu = 0,
    /// background service
    Service = 1,
    /// event hook without ui
    Hook = 2,
}

/// static plugin metadata reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub slug: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub api_version: u32,
    pub kind: PluginType,
    pub flags: u32,
}

pub static PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Screenshot",
    slug: "screenshot",
    version: env!("CARGO_PKG_VERSION"),
    author: "Tanmatsu",
    description: "Capture screenshots with LOGO+P",
    api_version: API_VERSION,
    kind: PluginType::Hook,
    flags: 0,
};

impl Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.slug)
    }
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to register input hook (host returned {0})")]
    HookRegistration(HookId),
}

/// services the host firmware offers to plugins
pub trait PluginHost {
    /// register `hook` for every input event, returns a negative id on failure
    fn register_input_hook(&mut self, hook: Box<dyn InputHook>) -> HookId;

    fn unregister_input_hook(&mut self, id: HookId);
}

impl<H: PluginHost + ?Sized> PluginHost for &mut H {
    fn register_input_hook(&mut self, hook: Box<dyn InputHook>) -> HookId {
        (**self).register_input_hook(hook)
    }

    fn unregister_input_hook(&mut self, id: HookId) {
        (**self).unregister_input_hook(id)
    }
}

/// a loaded plugin instance
///
/// Holds the hook registration from [`ScreenshotPlugin::init`] until
/// [`ScreenshotPlugin::cleanup`] or drop, whichever comes first.
pub struct ScreenshotPlugin<H: PluginHost> {
    host: H,
    hook_id: Option<HookId>,
}

impl<H: PluginHost> ScreenshotPlugin<H> {
    pub fn info() -> &'static PluginInfo {
        &PLUGIN_INFO
    }

    /// register `hook` with the host
    pub fn init(mut host: H, hook: impl InputHook + 'static) -> Result<Self, InitError> {
        log::info!(target: LOG_TARGET, "Screenshot plugin initializing...");
        log::debug!(
            target: LOG_TARGET,
            "{} built {} (commit {})",
            PLUGIN_INFO,
            build::BUILD_TIME,
            build::SHORT_COMMIT
        );

        let id = host.register_input_hook(Box::new(hook));
        if id < 0 {
            log::error!(target: LOG_TARGET, "Failed to register input hook");
            return Err(InitError::HookRegistration(id));
        }

        log::info!(target: LOG_TARGET, "Screenshot plugin initialized, hook_id={id}");
        Ok(Self {
            host,
            hook_id: Some(id),
        })
    }

    pub fn hook_id(&self) -> Option<HookId> {
        self.hook_id
    }

    /// the host the hook is registered with
    pub fn host(&self) -> &H {
        &self.host
    }

    /// the host, e.g. to dispatch events while the hook is registered
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// unregister the hook
    pub fn cleanup(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.hook_id.take() {
            self.host.unregister_input_hook(id);
            log::info!(target: LOG_TARGET, "Screenshot plugin cleaned up");
        }
    }
}

impl<H: PluginHost> Drop for ScreenshotPlugin<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// minimal in-process host dispatching events to registered hooks
///
/// Hooks run in registration order until one of them handles the event.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<(HookId, Box<dyn InputHook>)>,
    next_id: HookId,
    capacity: Option<usize>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// registry refusing registrations beyond `capacity` hooks
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// dispatch `event`, returns whether a hook consumed it
    pub fn dispatch(&mut self, event: &KeyEvent) -> Verdict {
        for (id, hook) in self.hooks.iter_mut() {
            if hook.on_input(event).is_handled() {
                log::debug!(target: LOG_TARGET, "event {event} consumed by hook {id}");
                return Verdict::Handled;
            }
        }
        Verdict::NotHandled
    }
}

impl PluginHost for HookRegistry {
    fn register_input_hook(&mut self, hook: Box<dyn InputHook>) -> HookId {
        if self.capacity.is_some_and(|c| self.hooks.len() >= c) {
            return -1;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.hooks.push((id, hook));
        id
    }

    fn unregister_input_hook(&mut self, id: HookId) {
        self.hooks.retain(|(h, _)| *h != id);
    }
}
