use crate::math::{self, Matrix3, Point2, Vector2};
use crate::pool::EntitySlug;

/// Payload of a scene graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Entity this node draws.
    pub slug: EntitySlug,
    /// Position relative to the parent node.
    pub position: Vector2,
    /// Model points in object space.
    pub model: Vec<Point2>,
    /// Logical parent entity, for lookup only. The scene tree decides the
    /// actual transform parent.
    pub parent: Option<EntitySlug>,
    world: Matrix3,
}

impl SceneNode {
    /// Creates a node at the parent's origin whose model is a single point.
    #[must_use]
    pub fn new(slug: impl Into<EntitySlug>) -> Self {
        Self {
            slug: slug.into(),
            position: Vector2::zeros(),
            model: vec![Point2::origin()],
            parent: None,
            world: Matrix3::identity(),
        }
    }

    /// Sets the local position.
    #[must_use]
    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    /// Sets the model points.
    #[must_use]
    pub fn with_model(mut self, model: Vec<Point2>) -> Self {
        self.model = model;
        self
    }

    /// Sets the logical parent entity.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<EntitySlug>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Object-to-world transform as of the last render.
    #[must_use]
    pub fn world(&self) -> &Matrix3 {
        &self.world
    }

    /// Translation of the local position.
    #[must_use]
    pub fn local(&self) -> Matrix3 {
        math::translation(&self.position)
    }

    /// Model points mapped into world space by the last composed transform.
    #[must_use]
    pub fn render_model(&self) -> Vec<Point2> {
        self.model
            .iter()
            .map(|point| math::transform_point(&self.world, point))
            .collect()
    }

    pub(crate) fn set_world(&mut self, world: Matrix3) {
        self.world = world;
    }
}
