use crate::core::Vec3;
use crate::domain::object::{PhysicsObject, RenderHandle};

use super::SimulationCore;

/// Floats per object in the transform buffer:
/// screen x, screen y, z, rot x, rot y, rot z, size
pub const TRANSFORM_STRIDE: usize = 7;

/// Visual placement of one object, in screen pixels and degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position with the origin moved to the viewport's top-left corner
    pub translate: Vec3,
    pub rotation: Vec3,
    pub size: f32,
}

impl Transform {
    /// CSS transform string for DOM-based hosts
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            self.translate.x, self.translate.y, self.translate.z, self.rotation.x, self.rotation.y, self.rotation.z
        )
    }
}

/// Receives a transform for every object, once per frame.
/// The simulation never reads anything back.
pub trait Renderer {
    fn place(&mut self, handle: RenderHandle, transform: &Transform);
}

pub(super) fn transform_of(sim: &SimulationCore, obj: &PhysicsObject) -> Transform {
    let (offset_x, offset_y) = sim.bounds.screen_offset();
    Transform {
        translate: Vec3::new(obj.position.x + offset_x, obj.position.y + offset_y, obj.position.z),
        rotation: obj.rotation,
        size: obj.size,
    }
}

pub(super) fn render<R: Renderer + ?Sized>(sim: &SimulationCore, renderer: &mut R) {
    for obj in sim.objects.iter() {
        let transform = transform_of(sim, obj);
        renderer.place(obj.handle, &transform);
    }
}

pub(super) fn extract_transforms(sim: &mut SimulationCore) -> &[f32] {
    let (offset_x, offset_y) = sim.bounds.screen_offset();
    let buffer = &mut sim.transforms;
    buffer.clear();
    buffer.reserve(sim.objects.len() * TRANSFORM_STRIDE);

    for obj in sim.objects.iter() {
        buffer.extend_from_slice(&[
            obj.position.x + offset_x,
            obj.position.y + offset_y,
            obj.position.z,
            obj.rotation.x,
            obj.rotation.y,
            obj.rotation.z,
            obj.size,
        ]);
    }

    &sim.transforms
}
