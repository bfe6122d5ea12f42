//! Nip painting through a minimal path-drawing surface

/// A 2D surface that can build and fill a path
pub trait Canvas {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close(&mut self);
    /// Fill the current path and start a new one
    fn fill(&mut self, color: [f32; 4]);
}

/// Recorded path operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo([f32; 2]),
    LineTo([f32; 2]),
    Close,
    Fill([f32; 4]),
}

impl PathCommand {
    /// The point carried by this command, if any
    pub fn point(&self) -> Option<[f32; 2]> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::Close | Self::Fill(_) => None,
        }
    }

    /// Same command with its point mapped through `f`
    pub fn map_point(self, f: impl Fn([f32; 2]) -> [f32; 2]) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(f(p)),
            Self::LineTo(p) => Self::LineTo(f(p)),
            other => other,
        }
    }
}

/// Canvas that records every command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathRecorder {
    commands: Vec<PathCommand>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Points of all move/line commands, in order
    pub fn points(&self) -> Vec<[f32; 2]> {
        self.commands.iter().filter_map(PathCommand::point).collect()
    }
}

impl Canvas for PathRecorder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo([x, y]));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo([x, y]));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    fn fill(&mut self, color: [f32; 4]) {
        self.commands.push(PathCommand::Fill(color));
    }
}

/// Replay recorded commands onto another canvas
pub fn replay(commands: &[PathCommand], canvas: &mut impl Canvas) {
    for command in commands {
        match *command {
            PathCommand::MoveTo([x, y]) => canvas.move_to(x, y),
            PathCommand::LineTo([x, y]) => canvas.line_to(x, y),
            PathCommand::Close => canvas.close(),
            PathCommand::Fill(color) => canvas.fill(color),
        }
    }
}

/// Paints the nip: an upward-pointing isosceles triangle filling its box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrianglePainter {
    pub color: [f32; 4],
}

impl TrianglePainter {
    pub fn new(color: [f32; 4]) -> Self {
        Self { color }
    }

    /// Draw into a `size[0] x size[1]` box with its origin at the top-left
    pub fn paint(&self, canvas: &mut impl Canvas, size: [f32; 2]) {
        let [w, h] = size;
        canvas.move_to(w / 2.0, 0.0);
        canvas.line_to(0.0, h);
        canvas.line_to(w, h);
        canvas.close();
        canvas.fill(self.color);
    }

    /// Only a color change makes the previous output stale
    pub fn should_repaint(&self, old: &TrianglePainter) -> bool {
        self.color != old.color
    }
}
