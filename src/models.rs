use serde::{Deserialize, Serialize};

/// Connected region of set mask pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u32,
    pub sum_x: u64,
    pub sum_y: u64,
}

impl Region {
    pub fn new(label: u32, x: u32, y: u32) -> Self {
        Self {
            label,
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
            pixel_count: 1,
            sum_x: x as u64,
            sum_y: y as u64,
        }
    }

    pub fn add_pixel(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
        self.sum_x += x as u64;
        self.sum_y += y as u64;
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn area(&self) -> u32 {
        self.pixel_count
    }

    /// Center of mass, truncated to whole pixels
    pub fn centroid(&self) -> Centroid {
        let n = self.pixel_count.max(1) as u64;
        Centroid {
            x: (self.sum_x / n) as u32,
            y: (self.sum_y / n) as u32,
        }
    }

    pub fn touches_border(&self, width: u32, height: u32) -> bool {
        self.min_x == 0 || self.min_y == 0 || self.max_x + 1 >= width || self.max_y + 1 >= height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Centroid {
    pub x: u32,
    pub y: u32,
}

/// Detections for one color reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorDetections {
    pub name: String,
    pub marker: [u8; 3],
    pub centroids: Vec<Centroid>,
}

impl ColorDetections {
    pub fn count(&self) -> usize {
        self.centroids.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub colors: Vec<ColorDetections>,
}

impl DetectionReport {
    pub fn get(&self, name: &str) -> Option<&ColorDetections> {
        self.colors.iter().find(|c| c.name == name)
    }

    pub fn total(&self) -> usize {
        self.colors.iter().map(ColorDetections::count).sum()
    }

    /// Human-readable listing, one block per color
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for color in &self.colors {
            out.push_str(&format!(
                "Detected {} {} skittles at:\n",
                color.count(),
                color.name
            ));
            for c in &color.centroids {
                out.push_str(&format!("  - ({}, {})\n", c.x, c.y));
            }
        }
        out
    }
}
