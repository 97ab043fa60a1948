//! Level descriptors
//!
//! Levels are plain data: geometry, spawn, goal, hazards and decorative
//! layers. Descriptors are validated once when a campaign is loaded; the
//! simulation only derives runtime entities from them and never mutates them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::body::Rgb;
use crate::tuning::Tuning;

/// Descriptor problems, reported at load time
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("campaign has no levels")]
    EmptyCampaign,

    #[error("level '{level}': width must be positive, got {width}")]
    Width { level: String, width: f32 },

    #[error("level '{level}': bounds [{left}, {right}] are empty or inverted")]
    Bounds { level: String, left: f32, right: f32 },

    #[error("level '{level}': goal must have positive size, got {width}x{height}")]
    GoalSize {
        level: String,
        width: f32,
        height: f32,
    },

    #[error("level '{level}': platform {index} must have positive size, got {width}x{height}")]
    PlatformSize {
        level: String,
        index: usize,
        width: f32,
        height: f32,
    },

    #[error("level '{level}': enemy {index} patrol [{min}, {max}] is too narrow for its body")]
    PatrolRange {
        level: String,
        index: usize,
        min: f32,
        max: f32,
    },

    #[error("level '{level}': enemy {index} starts at x={x}, outside its patrol")]
    EnemyOutsidePatrol { level: String, index: usize, x: f32 },

    #[error("level '{level}': enemy {index} has zero speed")]
    EnemySpeed { level: String, index: usize },

    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_name() -> String {
    "Level".to_string()
}

fn default_ground_color() -> Rgb {
    [110, 70, 30]
}

/// Goal rectangle; size falls back to tuning defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDescriptor {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    /// `[x, y, width, height]`
    pub rect: [f32; 4],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDescriptor {
    /// Top-left `[x, y]`
    pub position: [f32; 2],
    /// `[min_x, max_x]`
    pub patrol: [f32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

/// Background cloud, drawn as three overlapping circles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    #[serde(default = "Cloud::default_y")]
    pub y: f32,
    #[serde(default = "Cloud::default_scale")]
    pub scale: f32,
    #[serde(default = "Cloud::default_parallax")]
    pub parallax: f32,
}

impl Cloud {
    fn default_y() -> f32 {
        120.0
    }
    fn default_scale() -> f32 {
        1.0
    }
    fn default_parallax() -> f32 {
        0.5
    }
}

/// Foreground bush (ellipse); scrolls with the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bush {
    pub x: f32,
    /// Defaults to 110 above the viewport bottom when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default = "Bush::default_width")]
    pub width: f32,
    #[serde(default = "Bush::default_color")]
    pub color: Rgb,
}

impl Bush {
    fn default_width() -> f32 {
        120.0
    }
    fn default_color() -> Rgb {
        [60, 160, 80]
    }
}

/// Background hill (triangle standing on the viewport bottom)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hill {
    pub x: f32,
    #[serde(default = "Hill::default_width")]
    pub width: f32,
    #[serde(default = "Hill::default_height")]
    pub height: f32,
    #[serde(default = "Hill::default_color")]
    pub color: Rgb,
    #[serde(default = "Hill::default_parallax")]
    pub parallax: f32,
}

impl Hill {
    fn default_width() -> f32 {
        320.0
    }
    fn default_height() -> f32 {
        140.0
    }
    fn default_color() -> Rgb {
        [120, 180, 120]
    }
    fn default_parallax() -> f32 {
        0.2
    }
}

/// Decorative layers; ignored by the simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decorations {
    pub clouds: Vec<Cloud>,
    pub bushes: Vec<Bush>,
    pub hills: Vec<Hill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_fill: Option<Rgb>,
}

/// One level as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    #[serde(default = "default_name")]
    pub name: String,
    pub width: f32,
    /// Camera limits `[left, right]`; `[0, width]` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[f32; 2]>,
    /// Player top-left at level start
    pub spawn: [f32; 2],
    pub goal: GoalDescriptor,
    #[serde(default = "default_ground_color")]
    pub ground_color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgb>,
    #[serde(default)]
    pub platforms: Vec<PlatformDescriptor>,
    #[serde(default)]
    pub enemies: Vec<EnemyDescriptor>,
    #[serde(default)]
    pub decorations: Decorations,
}

impl LevelDescriptor {
    /// Camera limits, falling back to `[0, width]`
    pub fn world_bounds(&self) -> (f32, f32) {
        match self.bounds {
            Some([left, right]) => (left, right),
            None => (0.0, self.width),
        }
    }

    pub fn validate(&self, tuning: &Tuning) -> Result<(), LevelError> {
        let level = || self.name.clone();

        if self.width <= 0.0 {
            return Err(LevelError::Width {
                level: level(),
                width: self.width,
            });
        }

        let (left, right) = self.world_bounds();
        if left >= right {
            return Err(LevelError::Bounds {
                level: level(),
                left,
                right,
            });
        }

        let goal_w = self.goal.width.unwrap_or(tuning.goal_default_width);
        let goal_h = self.goal.height.unwrap_or(tuning.goal_default_height);
        if goal_w <= 0.0 || goal_h <= 0.0 {
            return Err(LevelError::GoalSize {
                level: level(),
                width: goal_w,
                height: goal_h,
            });
        }

        for (index, platform) in self.platforms.iter().enumerate() {
            let [_, _, width, height] = platform.rect;
            if width <= 0.0 || height <= 0.0 {
                return Err(LevelError::PlatformSize {
                    level: level(),
                    index,
                    width,
                    height,
                });
            }
        }

        for (index, enemy) in self.enemies.iter().enumerate() {
            let [min, max] = enemy.patrol;
            if max - min <= tuning.enemy_size {
                return Err(LevelError::PatrolRange {
                    level: level(),
                    index,
                    min,
                    max,
                });
            }
            let x = enemy.position[0];
            if x < min || x + tuning.enemy_size > max {
                return Err(LevelError::EnemyOutsidePatrol {
                    level: level(),
                    index,
                    x,
                });
            }
            if enemy.speed == Some(0.0) {
                return Err(LevelError::EnemySpeed {
                    level: level(),
                    index,
                });
            }
        }

        Ok(())
    }
}

/// An ordered, validated sequence of levels; never empty
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Campaign {
    levels: Vec<LevelDescriptor>,
}

impl Campaign {
    pub fn new(mut levels: Vec<LevelDescriptor>, tuning: &Tuning) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCampaign);
        }
        for level in &mut levels {
            if level.name.trim().is_empty() {
                level.name = default_name();
            }
            level.validate(tuning)?;
        }
        Ok(Self { levels })
    }

    /// Parse a JSON array of level descriptors and validate it
    pub fn from_json(json: &str, tuning: &Tuning) -> Result<Self, LevelError> {
        let levels: Vec<LevelDescriptor> = serde_json::from_str(json)?;
        Self::new(levels, tuning)
    }

    pub fn first(&self) -> &LevelDescriptor {
        &self.levels[0]
    }

    pub fn levels(&self) -> &[LevelDescriptor] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDescriptor> {
        self.levels.get(index)
    }

    /// The three stock levels, laid out against the viewport height and
    /// validated against `tuning` like any loaded campaign
    pub fn builtin(tuning: &Tuning) -> Result<Self, LevelError> {
        let levels = vec![
            sunny_fields(tuning),
            crystal_cavern(tuning),
            sunset_heights(tuning),
        ];
        Self::new(levels, tuning)
    }
}

fn platforms(rects: &[[f32; 4]]) -> Vec<PlatformDescriptor> {
    rects
        .iter()
        .map(|&rect| PlatformDescriptor { rect, color: None })
        .collect()
}

/// Enemy of side `size` standing on a platform top at `platform_y`,
/// patrolling its full width
fn patrol(
    size: f32,
    x: f32,
    platform_x: f32,
    platform_w: f32,
    platform_y: f32,
    speed: f32,
) -> EnemyDescriptor {
    EnemyDescriptor {
        position: [x, platform_y - size],
        patrol: [platform_x, platform_x + platform_w],
        speed: Some(speed),
    }
}

fn cloud(x: f32, y: f32, scale: f32) -> Cloud {
    Cloud {
        x,
        y,
        scale,
        parallax: Cloud::default_parallax(),
    }
}

fn bush(x: f32, y: f32, width: f32, color: Option<Rgb>) -> Bush {
    Bush {
        x,
        y: Some(y),
        width,
        color: color.unwrap_or_else(Bush::default_color),
    }
}

fn hill(x: f32, width: f32, height: f32, color: Rgb, parallax: f32) -> Hill {
    Hill {
        x,
        width,
        height,
        color,
        parallax,
    }
}

fn sunny_fields(tuning: &Tuning) -> LevelDescriptor {
    let h = tuning.viewport_height;
    let e = tuning.enemy_size;
    LevelDescriptor {
        name: "Sunny Fields".to_string(),
        width: 2400.0,
        bounds: Some([-200.0, 2400.0]),
        spawn: [80.0, h - 220.0],
        goal: GoalDescriptor {
            x: 2200.0,
            y: h - 200.0,
            width: None,
            height: Some(170.0),
        },
        ground_color: [124, 92, 60],
        background_color: None,
        platforms: platforms(&[
            [180.0, h - 180.0, 220.0, 20.0],
            [520.0, h - 260.0, 220.0, 20.0],
            [860.0, h - 320.0, 180.0, 20.0],
            [1220.0, h - 230.0, 280.0, 20.0],
            [1660.0, h - 210.0, 200.0, 20.0],
            [1940.0, h - 290.0, 160.0, 20.0],
        ]),
        enemies: vec![patrol(e, 1240.0, 1220.0, 280.0, h - 230.0, 2.5)],
        decorations: Decorations {
            clouds: vec![
                cloud(140.0, 120.0, 1.1),
                cloud(540.0, 90.0, 0.9),
                cloud(960.0, 130.0, 1.3),
                cloud(1720.0, 110.0, 1.1),
            ],
            bushes: vec![
                bush(-150.0, h - 120.0, 160.0, None),
                bush(480.0, h - 120.0, 140.0, None),
                bush(980.0, h - 110.0, 200.0, None),
                bush(1620.0, h - 115.0, 180.0, None),
            ],
            hills: vec![
                hill(-200.0, 420.0, 130.0, [130, 200, 130], 0.2),
                hill(600.0, 360.0, 160.0, [120, 190, 120], 0.15),
                hill(1500.0, 480.0, 150.0, [140, 205, 140], 0.1),
            ],
            ground_fill: Some([120, 190, 120]),
        },
    }
}

fn crystal_cavern(tuning: &Tuning) -> LevelDescriptor {
    let h = tuning.viewport_height;
    let e = tuning.enemy_size;
    LevelDescriptor {
        name: "Crystal Cavern".to_string(),
        width: 2600.0,
        bounds: Some([-220.0, 2600.0]),
        spawn: [60.0, h - 260.0],
        goal: GoalDescriptor {
            x: 2380.0,
            y: h - 220.0,
            width: None,
            height: Some(180.0),
        },
        ground_color: [90, 75, 120],
        background_color: Some([100, 120, 160]),
        platforms: platforms(&[
            [240.0, h - 200.0, 160.0, 20.0],
            [470.0, h - 300.0, 200.0, 20.0],
            [760.0, h - 360.0, 180.0, 20.0],
            [1050.0, h - 280.0, 220.0, 20.0],
            [1380.0, h - 200.0, 220.0, 20.0],
            [1700.0, h - 300.0, 200.0, 20.0],
            [1980.0, h - 240.0, 200.0, 20.0],
            [2160.0, h - 320.0, 200.0, 20.0],
        ]),
        enemies: vec![
            patrol(e, 1090.0, 1050.0, 220.0, h - 280.0, 2.0),
            patrol(e, 1720.0, 1700.0, 200.0, h - 300.0, 2.5),
        ],
        decorations: Decorations {
            clouds: vec![
                cloud(200.0, 100.0, 0.8),
                cloud(880.0, 70.0, 1.4),
                cloud(1500.0, 90.0, 1.0),
                cloud(2100.0, 60.0, 0.9),
            ],
            bushes: vec![
                bush(-100.0, h - 125.0, 140.0, Some([70, 110, 140])),
                bush(820.0, h - 118.0, 160.0, Some([90, 130, 170])),
                bush(1600.0, h - 130.0, 180.0, Some([80, 120, 160])),
                bush(2200.0, h - 120.0, 200.0, Some([70, 110, 150])),
            ],
            hills: vec![
                hill(-220.0, 520.0, 180.0, [90, 110, 150], 0.15),
                hill(900.0, 480.0, 160.0, [110, 130, 170], 0.08),
                hill(1780.0, 500.0, 190.0, [80, 100, 140], 0.12),
            ],
            ground_fill: Some([90, 110, 150]),
        },
    }
}

fn sunset_heights(tuning: &Tuning) -> LevelDescriptor {
    let h = tuning.viewport_height;
    let e = tuning.enemy_size;
    LevelDescriptor {
        name: "Sunset Heights".to_string(),
        width: 2800.0,
        bounds: Some([-250.0, 2800.0]),
        spawn: [120.0, h - 240.0],
        goal: GoalDescriptor {
            x: 2550.0,
            y: h - 260.0,
            width: None,
            height: Some(200.0),
        },
        ground_color: [150, 90, 40],
        background_color: Some([205, 150, 120]),
        platforms: platforms(&[
            [320.0, h - 260.0, 200.0, 20.0],
            [640.0, h - 340.0, 220.0, 20.0],
            [980.0, h - 280.0, 180.0, 20.0],
            [1280.0, h - 360.0, 260.0, 20.0],
            [1620.0, h - 300.0, 220.0, 20.0],
            [1920.0, h - 240.0, 200.0, 20.0],
            [2140.0, h - 320.0, 220.0, 20.0],
            [2400.0, h - 260.0, 220.0, 20.0],
        ]),
        enemies: vec![
            patrol(e, 1340.0, 1280.0, 260.0, h - 360.0, 3.0),
            patrol(e, 2160.0, 2140.0, 220.0, h - 320.0, 2.8),
        ],
        decorations: Decorations {
            clouds: vec![
                cloud(160.0, 110.0, 1.2),
                cloud(620.0, 90.0, 1.0),
                cloud(1180.0, 120.0, 1.4),
                cloud(1900.0, 100.0, 1.1),
                cloud(2400.0, 130.0, 0.9),
            ],
            bushes: vec![
                bush(-80.0, h - 110.0, 170.0, Some([180, 120, 60])),
                bush(740.0, h - 115.0, 200.0, Some([200, 140, 80])),
                bush(1500.0, h - 120.0, 220.0, Some([190, 130, 70])),
                bush(2220.0, h - 115.0, 180.0, Some([210, 150, 90])),
            ],
            hills: vec![
                hill(-260.0, 520.0, 200.0, [230, 170, 120], 0.1),
                hill(940.0, 520.0, 220.0, [210, 150, 100], 0.08),
                hill(1900.0, 520.0, 210.0, [200, 140, 90], 0.12),
            ],
            ground_fill: Some([210, 150, 110]),
        },
    }
}
