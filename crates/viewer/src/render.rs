use foundation::math::Vec3;
use scene::camera::OrbitCamera;
use scene::marker::VisualId;

/// The rendering collaborator consumed by the frame loop.
///
/// Implementations own the scene graph, the sphere mesh, and every marker
/// visual; the core only holds [`VisualId`] handles.
pub trait RenderBackend {
    /// Creates a marker's visual object at `position`, initially hidden.
    /// Visibility is driven every render tick by the activity recomputation.
    fn create_marker_visual(&mut self, position: Vec3) -> VisualId;

    fn set_visual_visible(&mut self, visual: VisualId, visible: bool);

    /// One render call per render tick.
    fn render(&mut self, camera: &OrbitCamera);

    /// Synchronous release of every GPU resource on teardown.
    fn release_all(&mut self);
}
