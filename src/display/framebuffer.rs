use crate::textures::Rgb;

/// Text printed over the pixels, positioned in terminal cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub ink: Rgb,
}

/// Screen-resolution pixels: one column per terminal column, two rows per
/// terminal row.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
    captions: Vec<Caption>,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(2);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width * height) as usize],
            captions: Vec::new(),
        }
    }

    /// Sized for a terminal of `cols`×`rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as i32, rows as i32 * 2)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn clear(&mut self, colour: Rgb) {
        self.pixels.fill(colour);
        self.captions.clear();
    }

    pub fn put(&mut self, x: i32, y: i32, colour: Rgb) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = colour;
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Queues text at a cell; text starting off screen is dropped.
    pub fn add_caption(&mut self, col: i32, row: i32, text: impl Into<String>, ink: Rgb) {
        if col < 0 || row < 0 || col >= self.width || row >= self.height / 2 {
            return;
        }
        self.captions.push(Caption {
            col: col as u16,
            row: row as u16,
            text: text.into(),
            ink,
        });
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }
}
