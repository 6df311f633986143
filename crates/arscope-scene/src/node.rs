//! Scene nodes: transforms, geometry/material descriptions, lights.

use glam::{Mat4, Quat, Vec3};

use arscope_core::NodeId;

use crate::asset::AssetRef;

/// Shape description consumed by the external render engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned plane in the node's local XY plane.
    Plane { width: f32, height: f32 },
    /// Cube centered on the node origin.
    Cube { size: f32 },
    /// Flat disc in the local XY plane (rotated into place by the node).
    Disc { radius: f32, segments: u32 },
    /// Wireframe line set, used for the frustum helper.
    Lines {
        points: Vec<Vec3>,
        edges: Vec<[u32; 2]>,
    },
    /// External asset resolved by the loader.
    Asset { reference: AssetRef },
}

/// Surface description consumed by the external render engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Unlit color, optionally translucent and double-sided.
    Basic {
        color: Vec3,
        opacity: f32,
        double_sided: bool,
    },
    /// Shades by surface normal.
    Normal { flat_shading: bool },
}

/// Light description. Carried as scene data only; illumination is the
/// render engine's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient { color: Vec3 },
    Hemisphere { sky: Vec3, ground: Vec3, intensity: f32 },
    Directional { color: Vec3, intensity: f32 },
    Spot { color: Vec3 },
}

/// What a node contributes to the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Mesh { geometry: Geometry, material: Material },
    Light(Light),
    /// Pure transform parent.
    Group,
}

/// One scene node: a local transform, a kind, and owned children.
///
/// There is deliberately no `Clone` impl. The only copy operation is
/// [`Node::clone_subtree`], which assigns fresh [`NodeId`]s throughout, so
/// node identity can never be shared between two scenes (the mirror-link
/// contract).
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    /// Local translation.
    pub position: Vec3,
    /// Local rotation.
    pub orientation: Quat,
    /// Local scale.
    pub scale: Vec3,
    /// Whether the render engine should draw this subtree.
    pub visible: bool,
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node of the given kind with an identity transform.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId::next(),
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
            visible: true,
            kind,
            children: Vec::new(),
        }
    }

    /// Creates an empty transform group.
    #[must_use]
    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    /// Creates a mesh node.
    #[must_use]
    pub fn mesh(geometry: Geometry, material: Material) -> Self {
        Self::new(NodeKind::Mesh { geometry, material })
    }

    /// Creates a light node.
    #[must_use]
    pub fn light(light: Light) -> Self {
        Self::new(NodeKind::Light(light))
    }

    /// This node's handle.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Sets a uniform scale.
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }

    /// Adds a child, returning its handle.
    pub fn add_child(&mut self, child: Node) -> NodeId {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Local transform matrix.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// Deep-copies this subtree with fresh node ids.
    ///
    /// The copy shares no identity with the original; mutating or removing
    /// one never affects the other.
    #[must_use]
    pub fn clone_subtree(&self) -> Node {
        Node {
            id: NodeId::next(),
            position: self.position,
            orientation: self.orientation,
            scale: self.scale,
            visible: self.visible,
            kind: self.kind.clone(),
            children: self.children.iter().map(Node::clone_subtree).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> Node {
        let mut plane = Node::mesh(
            Geometry::Plane {
                width: 1.0,
                height: 1.0,
            },
            Material::Basic {
                color: Vec3::ONE,
                opacity: 0.1,
                double_sided: true,
            },
        );
        plane.add_child(Node::mesh(
            Geometry::Cube { size: 0.25 },
            Material::Normal { flat_shading: true },
        ));
        plane
    }

    #[test]
    fn test_clone_subtree_assigns_fresh_ids() {
        let original = marker();
        let copy = original.clone_subtree();

        assert_ne!(original.id(), copy.id());
        assert_eq!(original.children.len(), copy.children.len());
        assert_ne!(original.children[0].id(), copy.children[0].id());
        assert_eq!(original.kind, copy.kind);
        assert_eq!(original.children[0].kind, copy.children[0].kind);
    }

    #[test]
    fn test_clone_subtree_is_a_value_copy() {
        let original = marker();
        let mut copy = original.clone_subtree();

        copy.position = Vec3::new(5.0, 0.0, 0.0);
        copy.children.clear();

        assert_eq!(original.position, Vec3::ZERO);
        assert_eq!(original.children.len(), 1);
    }

    #[test]
    fn test_local_matrix_composes_srt() {
        let mut node = Node::group();
        node.position = Vec3::new(1.0, 2.0, 3.0);
        node.set_uniform_scale(2.0);

        let (s, _, t) = node.local_matrix().to_scale_rotation_translation();
        assert!(s.abs_diff_eq(Vec3::splat(2.0), 1e-6));
        assert!(t.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }
}
