//! Frame draw list
//!
//! `Scene::build` turns the game state into an ordered list of draw
//! commands. Backends draw them front to back in order; nothing here knows
//! about pixels or fonts beyond nominal sizes.

use glam::IVec2;

use super::assets::{Assets, SpriteId};
use super::colors;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// Font sizes used by the HUD (points, bold)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Hud,
    Small,
    Big,
}

impl FontSize {
    pub fn points(&self) -> i32 {
        match self {
            FontSize::Hud => 28,
            FontSize::Small => 22,
            FontSize::Big => 80,
        }
    }

    /// Approximate rendered line height
    pub fn line_height(&self) -> i32 {
        (self.points() as f32 * 1.15).round() as i32
    }
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        dest: Rect,
    },
    FillRect {
        rect: Rect,
        color: [f32; 4],
    },
    Text {
        text: String,
        size: FontSize,
        color: [f32; 4],
        pos: IVec2,
        anchor: Anchor,
    },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn build(state: &GameState, assets: &Assets, settings: &Settings) -> Self {
        let mut scene = Scene::default();

        // Background: two copies tiled for a seamless wrap
        for x in [state.bg_x, state.bg_x + SCREEN_W] {
            scene.push(DrawCommand::Sprite {
                sprite: SpriteId::Background,
                dest: Rect::new(x, 0, SCREEN_W, SCREEN_H),
            });
        }

        for (_, platform) in state.platforms.iter() {
            scene.fill(platform.rect, colors::PLATFORM_BODY);
            scene.fill(platform.top_strip(), colors::PLATFORM_TOP);
        }

        scene.push(DrawCommand::Sprite {
            sprite: SpriteId::Player,
            dest: state.player.rect,
        });

        if state.is_lost() {
            scene.push_lost_overlay(assets, settings);
        } else {
            scene.push_hud(state, settings);
        }

        scene
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn fill(&mut self, rect: Rect, color: [f32; 4]) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn text(&mut self, text: impl Into<String>, size: FontSize, color: [f32; 4], pos: IVec2, anchor: Anchor) {
        self.push(DrawCommand::Text {
            text: text.into(),
            size,
            color,
            pos,
            anchor,
        });
    }

    fn push_hud(&mut self, state: &GameState, settings: &Settings) {
        self.text(
            format!("Score: {}", state.score),
            FontSize::Hud,
            colors::TEXT_DARK,
            IVec2::new(10, 10),
            Anchor::TopLeft,
        );
        self.text(
            format!("High Score: {}", state.high_score.best()),
            FontSize::Hud,
            colors::TEXT_DARK,
            IVec2::new(10, 40),
            Anchor::TopLeft,
        );

        if state.show_instructions && settings.show_instructions {
            let right = SCREEN_W - 10;
            self.text(
                "Controls:",
                FontSize::Small,
                colors::TEXT_DARK,
                IVec2::new(right, 10),
                Anchor::TopRight,
            );
            self.text(
                format!("{} = Jump", settings.jump_keys_label()),
                FontSize::Small,
                colors::TEXT_DARK,
                IVec2::new(right, 10 + FontSize::Small.line_height() + 4),
                Anchor::TopRight,
            );
        }
    }

    fn push_lost_overlay(&mut self, assets: &Assets, settings: &Settings) {
        self.fill(Rect::new(0, 0, SCREEN_W, SCREEN_H), colors::LOST_OVERLAY);

        match &assets.lost_banner {
            Some(banner) => {
                let center = IVec2::new(SCREEN_W / 2, SCREEN_H / 2 - 20);
                self.push(DrawCommand::Sprite {
                    sprite: SpriteId::LostBanner,
                    dest: Rect {
                        pos: center - banner.size / 2,
                        size: banner.size,
                    },
                });
            }
            None => self.text(
                "YOU LOST",
                FontSize::Big,
                colors::TEXT_DARK,
                IVec2::new(SCREEN_W / 2, SCREEN_H / 2),
                Anchor::Center,
            ),
        }

        self.text(
            format!("Press {} to restart", settings.restart_key.label().to_lowercase()),
            FontSize::Small,
            colors::TEXT_LIGHT,
            IVec2::new(SCREEN_W / 2, SCREEN_H - 40),
            Anchor::Center,
        );
    }

    /// Text of every text command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
