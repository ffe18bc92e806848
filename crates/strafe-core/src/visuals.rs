//! Render hints handed to the external renderer.
//!
//! The simulation never draws anything; it only tells the renderer which
//! mesh to create for a new entity. Colors are 0xRRGGBB.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyArchetype, Side};

/// Stable renderer-facing identifier for a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualId(pub u64);

impl VisualId {
    pub fn from_entity(entity: hecs::Entity) -> Self {
        Self(entity.to_bits().get())
    }
}

/// Which mesh an entity should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    Escort,
    Charger,
    Shooter,
    FriendlyBullet,
    HostileBullet,
    Missile,
}

/// Primitive mesh shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Cube { size: f64 },
    Sphere { radius: f64 },
    Cone { radius: f64, height: f64 },
}

/// Mesh description for one visual kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualSpec {
    pub shape: Shape,
    pub color: u32,
}

impl VisualKind {
    pub fn for_enemy(archetype: EnemyArchetype) -> Self {
        match archetype {
            EnemyArchetype::Charger => VisualKind::Charger,
            EnemyArchetype::Shooter => VisualKind::Shooter,
        }
    }

    pub fn for_bullet(side: Side) -> Self {
        match side {
            Side::Friendly => VisualKind::FriendlyBullet,
            Side::Hostile => VisualKind::HostileBullet,
        }
    }

    pub fn spec(self) -> VisualSpec {
        match self {
            VisualKind::Escort => VisualSpec {
                shape: Shape::Sphere { radius: 0.2 },
                color: 0xff8800,
            },
            VisualKind::Charger => VisualSpec {
                shape: Shape::Cube { size: 1.0 },
                color: 0xff0000,
            },
            VisualKind::Shooter => VisualSpec {
                shape: Shape::Cube { size: 1.0 },
                color: 0x0000ff,
            },
            VisualKind::FriendlyBullet => VisualSpec {
                shape: Shape::Sphere { radius: 0.1 },
                color: 0xffff00,
            },
            VisualKind::HostileBullet => VisualSpec {
                shape: Shape::Sphere { radius: 0.1 },
                color: 0xff00ff,
            },
            VisualKind::Missile => VisualSpec {
                shape: Shape::Cone {
                    radius: 0.2,
                    height: 0.5,
                },
                color: 0x00ff00,
            },
        }
    }
}
