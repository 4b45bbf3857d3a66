//! Game entities: the player's ship, its bullets and the aliens.
//!
//! Positions are stored in fractional cells so slow speeds still accumulate
//! smoothly; the display rounds them when drawing.

use crate::settings::Settings;

// ── Rectangles ────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box. `y` grows downward, like terminal rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Strict overlap; rectangles that merely share an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

// ── Sprite capability ─────────────────────────────────────────────────────────

/// What every moving thing on screen offers: a bounding box and a
/// per-frame update.
pub trait Sprite {
    fn rect(&self) -> Rect;
    fn update(&mut self, settings: &Settings);
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// A ship resting centred on the bottom edge.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            width: settings.ship_width,
            height: settings.ship_height,
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn center_ship(&mut self, settings: &Settings) {
        self.x = (settings.screen_width - self.width) / 2.0;
        self.y = settings.screen_height - self.height;
    }

    /// Middle of the top edge, where bullets leave the ship.
    pub fn midtop(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y)
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn update(&mut self, settings: &Settings) {
        let max_x = (settings.screen_width - self.width).max(0.0);
        if self.moving_right && self.x < max_x {
            self.x = (self.x + settings.ship_speed).min(max_x);
        }
        if self.moving_left && self.x > 0.0 {
            self.x = (self.x - settings.ship_speed).max(0.0);
        }
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    /// A bullet whose mid-top sits on the ship's mid-top.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let (mx, my) = ship.midtop();
        Bullet {
            x: mx - settings.bullet_width / 2.0,
            y: my,
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }

    /// True once the bullet has reached or passed the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.y <= 0.0
    }
}

impl Sprite for Bullet {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    /// An alien at grid cell (`col`, `row`); one alien-size gap separates
    /// neighbours and the fleet starts one alien-size in from the corner.
    pub fn at(settings: &Settings, col: u32, row: u32) -> Self {
        let width = settings.alien_width;
        let height = settings.alien_height;
        Alien {
            x: width + 2.0 * width * col as f32,
            y: height + 2.0 * height * row as f32,
            width,
            height,
        }
    }

    /// True if the alien touches either side of the screen.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.x >= settings.screen_width - self.width || self.x <= 0.0
    }
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction as f32;
    }
}
