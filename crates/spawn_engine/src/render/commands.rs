//! Outbound render commands
//!
//! # Design Philosophy
//!
//! The host should be a passive collaborator that:
//! - Creates and destroys renderables on request (no lifecycle decisions)
//! - Accepts finished transforms and colors (no simulation logic)
//! - Returns nothing the core depends on

use crate::foundation::collections::ObjectHandle;
use crate::foundation::math::{Transform, Vec4};

/// Side-effecting calls the spawn core makes into the host engine
pub trait RenderHost {
    /// Create a renderable for `handle`
    fn instantiate(&mut self, handle: ObjectHandle);

    /// Permanently remove the renderable for `handle`
    fn destroy(&mut self, handle: ObjectHandle);

    /// Show or hide the renderable
    fn set_active(&mut self, handle: ObjectHandle, active: bool);

    /// Local transform relative to the spawn area
    fn set_transform(&mut self, handle: ObjectHandle, transform: &Transform);

    /// Material color, alpha in `w`
    fn set_color(&mut self, handle: ObjectHandle, color: Vec4);

    /// Transform of the spawn area itself
    fn set_area_transform(&mut self, transform: &Transform);
}

/// A single recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// See [`RenderHost::instantiate`]
    Instantiate(ObjectHandle),
    /// See [`RenderHost::destroy`]
    Destroy(ObjectHandle),
    /// See [`RenderHost::set_active`]
    SetActive(ObjectHandle, bool),
    /// See [`RenderHost::set_transform`]
    SetTransform(ObjectHandle, Transform),
    /// See [`RenderHost::set_color`]
    SetColor(ObjectHandle, Vec4),
    /// See [`RenderHost::set_area_transform`]
    SetAreaTransform(Transform),
}

impl RenderCommand {
    /// Object the command targets, if any
    pub fn handle(&self) -> Option<ObjectHandle> {
        match self {
            Self::Instantiate(handle)
            | Self::Destroy(handle)
            | Self::SetActive(handle, _)
            | Self::SetTransform(handle, _)
            | Self::SetColor(handle, _) => Some(*handle),
            Self::SetAreaTransform(_) => None,
        }
    }
}

/// Host that records every call in order
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<RenderCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last drain
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Take all recorded commands, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded commands targeting `handle`
    pub fn commands_for(&self, handle: ObjectHandle) -> impl Iterator<Item = &RenderCommand> {
        self.commands.iter().filter(move |cmd| cmd.handle() == Some(handle))
    }

    /// Number of recorded `Instantiate` calls
    pub fn instantiated(&self) -> usize {
        self.count(|cmd| matches!(cmd, RenderCommand::Instantiate(_)))
    }

    /// Number of recorded `Destroy` calls
    pub fn destroyed(&self) -> usize {
        self.count(|cmd| matches!(cmd, RenderCommand::Destroy(_)))
    }

    fn count(&self, predicate: impl Fn(&RenderCommand) -> bool) -> usize {
        self.commands.iter().filter(|cmd| predicate(cmd)).count()
    }
}

impl RenderHost for CommandRecorder {
    fn instantiate(&mut self, handle: ObjectHandle) {
        self.commands.push(RenderCommand::Instantiate(handle));
    }

    fn destroy(&mut self, handle: ObjectHandle) {
        self.commands.push(RenderCommand::Destroy(handle));
    }

    fn set_active(&mut self, handle: ObjectHandle, active: bool) {
        self.commands.push(RenderCommand::SetActive(handle, active));
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: &Transform) {
        self.commands.push(RenderCommand::SetTransform(handle, transform.clone()));
    }

    fn set_color(&mut self, handle: ObjectHandle, color: Vec4) {
        self.commands.push(RenderCommand::SetColor(handle, color));
    }

    fn set_area_transform(&mut self, transform: &Transform) {
        self.commands.push(RenderCommand::SetAreaTransform(transform.clone()));
    }
}

/// Host that ignores every call
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl RenderHost for NullHost {
    fn instantiate(&mut self, _handle: ObjectHandle) {}
    fn destroy(&mut self, _handle: ObjectHandle) {}
    fn set_active(&mut self, _handle: ObjectHandle, _active: bool) {}
    fn set_transform(&mut self, _handle: ObjectHandle, _transform: &Transform) {}
    fn set_color(&mut self, _handle: ObjectHandle, _color: Vec4) {}
    fn set_area_transform(&mut self, _transform: &Transform) {}
}
