use macroquad::prelude::Color;
use rand::Rng;

/// How aged life cells are tinted relative to the live color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShadeMode {
    /// Older cells move toward white
    Brighten,
    /// Older cells move toward black
    #[default]
    DarkenInverse,
    /// Younger cells are darker, the oldest get the full live color
    Darken,
}

impl ShadeMode {
    pub fn all() -> Vec<ShadeMode> {
        vec![ShadeMode::Brighten, ShadeMode::DarkenInverse, ShadeMode::Darken]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShadeMode::Brighten => "Brighten",
            ShadeMode::DarkenInverse => "Darken inverse",
            ShadeMode::Darken => "Darken",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ShadeMode::Brighten => ShadeMode::DarkenInverse,
            ShadeMode::DarkenInverse => ShadeMode::Darken,
            ShadeMode::Darken => ShadeMode::Brighten,
        }
    }
}

/// Shape drawn for each cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellShape {
    #[default]
    Square,
    /// Disc 1.3 cells wide, so neighbors overlap into a soft blob
    Circle,
}

impl CellShape {
    pub fn name(&self) -> &'static str {
        match self {
            CellShape::Square => "Square",
            CellShape::Circle => "Circle",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CellShape::Square => CellShape::Circle,
            CellShape::Circle => CellShape::Square,
        }
    }

    /// Disc radius for a cell of side `cell_size`
    pub fn circle_radius(cell_size: f32) -> f32 {
        cell_size * 0.65
    }
}

/// Colors used to draw the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub dead: Color,
    pub live: Color,
    pub grid: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: Color::from_rgba(191, 185, 178, 255),
            live: Color::from_rgba(242, 255, 239, 255),
            grid: Color::from_rgba(170, 170, 170, 255),
        }
    }
}

impl Palette {
    /// Random dead and live colors, keeping the grid color
    pub fn randomized<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut random_color = || Color::from_rgba(rng.random(), rng.random(), rng.random(), 255);
        Self {
            dead: random_color(),
            live: random_color(),
            grid: self.grid,
        }
    }

    /// Color of a life cell with stored age `age` under an age cap
    pub fn life_color(&self, mode: ShadeMode, age: u32, max_generations: u32) -> Color {
        if age == 0 {
            return self.dead;
        }
        if max_generations <= 1 {
            return self.live;
        }
        let t = age.min(max_generations) as f32 / max_generations as f32;
        let tint = |c: f32| match mode {
            ShadeMode::Brighten => c + (1.0 - c) * t,
            ShadeMode::DarkenInverse => c * (1.0 - t),
            ShadeMode::Darken => c * t,
        };
        Color::new(tint(self.live.r), tint(self.live.g), tint(self.live.b), self.live.a)
    }

    /// Color of a diffusion cell: dead color at 0, live color at 1
    pub fn level_color(&self, level: f32) -> Color {
        let t = level.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Color::new(
            lerp(self.dead.r, self.live.r),
            lerp(self.dead.g, self.live.g),
            lerp(self.dead.b, self.live.b),
            lerp(self.dead.a, self.live.a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn close(a: Color, b: Color) -> bool {
        [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)]
            .iter()
            .all(|(x, y)| (x - y).abs() < 1e-5)
    }

    fn palette() -> Palette {
        Palette {
            dead: Color::new(0.0, 0.0, 0.0, 1.0),
            live: Color::new(0.5, 0.2, 1.0, 1.0),
            grid: Color::new(0.6, 0.6, 0.6, 1.0),
        }
    }

    #[test]
    fn test_dead_and_single_generation() {
        let p = palette();
        assert_eq!(p.life_color(ShadeMode::Brighten, 0, 5), p.dead);
        assert_eq!(p.life_color(ShadeMode::Darken, 1, 1), p.live);
    }

    #[test]
    fn test_shade_modes() {
        let p = palette();
        assert!(close(p.life_color(ShadeMode::Brighten, 2, 4), Color::new(0.75, 0.6, 1.0, 1.0)));
        assert!(close(p.life_color(ShadeMode::DarkenInverse, 2, 4), Color::new(0.25, 0.1, 0.5, 1.0)));
        assert!(close(p.life_color(ShadeMode::Darken, 4, 4), p.live));
        assert!(close(p.life_color(ShadeMode::DarkenInverse, 4, 4), Color::new(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_level_lerp() {
        let p = palette();
        assert!(close(p.level_color(0.0), p.dead));
        assert!(close(p.level_color(1.0), p.live));
        assert!(close(p.level_color(0.5), Color::new(0.25, 0.1, 0.5, 1.0)));
    }

    #[test]
    fn test_randomized_keeps_grid_color() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = palette().randomized(&mut rng);
        assert_eq!(p.grid, palette().grid);
        assert_eq!(p.live.a, 1.0);
    }

    #[test]
    fn test_shade_mode_cycle() {
        let mut mode = ShadeMode::Brighten;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ShadeMode::Brighten);
        assert_eq!(ShadeMode::all().len(), 3);
    }

    #[test]
    fn test_cell_shape_cycle() {
        assert_eq!(CellShape::default(), CellShape::Square);
        assert_eq!(CellShape::Square.next(), CellShape::Circle);
        assert_eq!(CellShape::Circle.next(), CellShape::Square);
        assert!((CellShape::circle_radius(20.0) - 13.0).abs() < 1e-5);
    }
}
