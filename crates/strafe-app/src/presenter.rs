//! Hands each frame to the external renderer and HUD.
//!
//! The simulation only produces snapshots; this module replays their scene
//! events as mesh additions/removals, pushes positions every frame, and
//! updates the HUD text when the weapon label or health changes.

use std::collections::HashMap;

use glam::DVec3;
use tracing::{info, trace};

use strafe_core::events::{GameEvent, SceneEvent};
use strafe_core::state::{FrameSnapshot, HudView};
use strafe_core::types::Position;
use strafe_core::visuals::{VisualId, VisualSpec};

use crate::game_loop::FrameSink;

/// Scene-graph collaborator.
pub trait SceneRenderer {
    fn add(&mut self, id: VisualId, spec: VisualSpec, position: Position);
    fn remove(&mut self, id: VisualId);
    fn set_position(&mut self, id: VisualId, position: Position);
    fn set_camera(&mut self, position: Position, view_direction: DVec3);
}

/// Plain-text HUD collaborator.
pub trait Hud {
    fn set_weapon_label(&mut self, label: &str);
    fn set_health(&mut self, health: i32);
    /// Shown once when the match ends.
    fn show_match_over(&mut self, tick: u64);
}

pub struct Presenter<R, H> {
    renderer: R,
    hud: H,
    last_hud: Option<HudView>,
}

impl<R: SceneRenderer, H: Hud> Presenter<R, H> {
    pub fn new(renderer: R, hud: H) -> Self {
        Self {
            renderer,
            hud,
            last_hud: None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn present(&mut self, snapshot: &FrameSnapshot) {
        for event in &snapshot.scene_events {
            match *event {
                SceneEvent::Added {
                    id,
                    visual,
                    position,
                } => self.renderer.add(id, visual.spec(), position),
                SceneEvent::Removed { id } => self.renderer.remove(id),
            }
        }

        self.renderer
            .set_camera(snapshot.player.position, snapshot.player.view_direction);
        for escort in &snapshot.escorts {
            self.renderer.set_position(escort.id, escort.position);
        }
        for enemy in &snapshot.enemies {
            self.renderer.set_position(enemy.id, enemy.position);
        }
        for projectile in &snapshot.projectiles {
            self.renderer.set_position(projectile.id, projectile.position);
        }

        self.update_hud(&snapshot.hud);

        for event in &snapshot.events {
            if let GameEvent::MatchEnded { tick } = *event {
                self.hud.show_match_over(tick);
            }
        }
    }

    fn update_hud(&mut self, hud: &HudView) {
        let last = self.last_hud.as_ref();
        if last.map(|l| l.weapon_label.as_str()) != Some(hud.weapon_label.as_str()) {
            self.hud.set_weapon_label(&hud.weapon_label);
        }
        if last.map(|l| l.health) != Some(hud.health) {
            self.hud.set_health(hud.health);
        }
        self.last_hud = Some(hud.clone());
    }
}

impl<R, H> FrameSink for Presenter<R, H>
where
    R: SceneRenderer + Send + 'static,
    H: Hud + Send + 'static,
{
    fn publish(&mut self, snapshot: &FrameSnapshot) {
        self.present(snapshot);
    }
}

/// Renderer for headless runs: keeps the mesh table and traces changes.
#[derive(Debug, Default)]
pub struct LogRenderer {
    meshes: HashMap<VisualId, (VisualSpec, Position)>,
}

impl LogRenderer {
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn position_of(&self, id: VisualId) -> Option<Position> {
        self.meshes.get(&id).map(|(_, position)| *position)
    }
}

impl SceneRenderer for LogRenderer {
    fn add(&mut self, id: VisualId, spec: VisualSpec, position: Position) {
        trace!(id = id.0, ?spec, "mesh added");
        self.meshes.insert(id, (spec, position));
    }

    fn remove(&mut self, id: VisualId) {
        trace!(id = id.0, "mesh removed");
        self.meshes.remove(&id);
    }

    fn set_position(&mut self, id: VisualId, position: Position) {
        if let Some((_, current)) = self.meshes.get_mut(&id) {
            *current = position;
        }
    }

    fn set_camera(&mut self, _position: Position, _view_direction: DVec3) {}
}

/// HUD for headless runs: writes every change to the log.
#[derive(Debug, Default)]
pub struct LogHud {
    pub weapon_label: String,
    pub health: i32,
    pub match_over: bool,
}

impl Hud for LogHud {
    fn set_weapon_label(&mut self, label: &str) {
        info!(weapon = label, "hud");
        self.weapon_label = label.to_string();
    }

    fn set_health(&mut self, health: i32) {
        info!(health, "hud");
        self.health = health;
    }

    fn show_match_over(&mut self, tick: u64) {
        info!(tick, "GAME OVER");
        self.match_over = true;
    }
}
