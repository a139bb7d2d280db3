//! Draw intents and the surface they are submitted to

use glam::Vec2;

use crate::sim::{MobAnim, PlayerAnim};

/// RGBA, components in [0, 1]
pub type Color = [f32; 4];

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.pos).all() && point.cmplt(self.pos + self.size).all()
    }
}

/// Sprite sheet rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Player(PlayerAnim),
    Mob(MobAnim),
}

/// One sprite frame placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub sheet: SpriteSheet,
    pub frame: u32,
    /// Screen-space center
    pub center: Vec2,
    /// Edge length on screen (canonical size times scale)
    pub size: f32,
    pub rotation_deg: f32,
    /// Sprite faces left
    pub mirrored: bool,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

/// Full-screen images supplied by the asset backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Arena,
    MenuBackground,
    CreditsBackground,
    TutorialPage(u8),
}

/// Presentation-only image distortion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Distortion {
    #[default]
    None,
    /// Block edge in pixels
    Pixelate(f32),
    /// Horizontal sine displacement per row
    Wave { amplitude: f32, phase: f32 },
}

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Image {
        image: ImageId,
        pos: Vec2,
        zoom: f32,
        alpha: f32,
        distortion: Distortion,
    },
    Rect {
        rect: Rect,
        color: Color,
        filled: bool,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Sprite(SpriteDraw),
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
        centered: bool,
    },
}

/// Drawing backend.
///
/// Backends only implement `size` and `submit`; the helpers build the
/// commands.
pub trait Surface {
    /// Drawable area in pixels
    fn size(&self) -> Vec2;

    fn submit(&mut self, command: DrawCommand);

    fn clear(&mut self, color: Color) {
        self.submit(DrawCommand::Clear(color));
    }

    fn image(&mut self, image: ImageId, pos: Vec2) {
        self.submit(DrawCommand::Image {
            image,
            pos,
            zoom: 1.0,
            alpha: 1.0,
            distortion: Distortion::None,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.submit(DrawCommand::Rect {
            rect,
            color,
            filled: true,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.submit(DrawCommand::Rect {
            rect,
            color,
            filled: false,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.submit(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    /// Closed outline through `points`
    fn polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.submit(DrawCommand::Polygon { points, color });
    }

    fn sprite(&mut self, sprite: SpriteDraw) {
        self.submit(DrawCommand::Sprite(sprite));
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color) {
        self.submit(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            size,
            color,
            centered: false,
        });
    }

    fn text_centered(&mut self, pos: Vec2, text: &str, size: f32, color: Color) {
        self.submit(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            size,
            color,
            centered: true,
        });
    }
}

/// Surface that records commands; used headless and in tests
#[derive(Debug, Clone)]
pub struct CommandBuffer {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded frame
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn sprites(&self) -> impl Iterator<Item = &SpriteDraw> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Sprite(sprite) => Some(sprite),
            _ => None,
        })
    }
}

impl Surface for CommandBuffer {
    fn size(&self) -> Vec2 {
        self.size
    }

    /// A clear starts a new frame and drops what was recorded before it
    fn submit(&mut self, command: DrawCommand) {
        if matches!(command, DrawCommand::Clear(_)) {
            self.commands.clear();
        }
        self.commands.push(command);
    }
}
