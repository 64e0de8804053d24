//! Snapshot builder: queries engine state and produces a `GameStateSnapshot`.
//!
//! Read-only; never mutates the engine.

use outbreak_core::enums::{EffectKind, GamePhase};
use outbreak_core::events::AudioEvent;
use outbreak_core::scene::SceneCommand;
use outbreak_core::state::*;
use outbreak_core::types::SimTime;

use crate::effects::EffectsState;
use crate::player::{PlayerState, Viewpoint};
use crate::score::ScoreState;
use crate::wave::WaveController;
use crate::weapons::Armory;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    phase: GamePhase,
    viewpoint: &Viewpoint,
    player: &PlayerState,
    armory: &Armory,
    waves: &WaveController,
    score: &ScoreState,
    effects: &EffectsState,
    scene_commands: Vec<SceneCommand>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        viewpoint: ViewpointView {
            position: viewpoint.position,
            yaw: viewpoint.orientation.yaw,
            pitch: viewpoint.orientation.pitch,
            velocity: viewpoint.velocity,
        },
        hud: build_hud(phase, player, armory, waves, score, effects),
        scene_commands,
        audio_events,
    }
}

fn build_hud(
    phase: GamePhase,
    player: &PlayerState,
    armory: &Armory,
    waves: &WaveController,
    score: &ScoreState,
    effects: &EffectsState,
) -> HudView {
    let popups = effects
        .effects
        .iter()
        .filter_map(|e| match e.kind {
            EffectKind::ScorePopup { points } => Some(PopupView {
                points,
                position: e.position,
                opacity: e.opacity(),
            }),
            _ => None,
        })
        .collect();

    let announcement = effects.effects.iter().find_map(|e| match e.kind {
        EffectKind::WaveAnnouncement { wave, bonus, boss } => Some(AnnouncementView {
            wave,
            bonus,
            boss,
            opacity: e.opacity(),
        }),
        _ => None,
    });

    HudView {
        health: player.health,
        max_health: player.max_health,
        wave: waves.wave,
        wave_phase: waves.phase,
        alive: waves.alive,
        score: score.score,
        high_score: score.high_score,
        weapon: armory.selected,
        ammo: armory.ammo(armory.selected),
        recoil: effects.level(EffectKind::Recoil),
        damage_flash: effects.level(EffectKind::DamageFlash),
        popups,
        announcement,
        game_over: phase == GamePhase::GameOver,
    }
}
