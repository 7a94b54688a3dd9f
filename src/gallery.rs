use crate::error::GalleryError;
use std::fmt;

/// Name of one bundled image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        ImageId(value.to_string())
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        ImageId(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Fixed, cyclic list of images with a cursor.
///
/// The list is never empty, so `current` always has an answer and moving
/// the cursor never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<ImageId>,
    current_index: usize,
}

impl Gallery {
    pub fn new(images: Vec<ImageId>) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::Empty);
        }

        Ok(Self {
            images,
            current_index: 0,
        })
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    pub fn retreat(&mut self) {
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.advance(),
            Direction::Backward => self.retreat(),
        }
    }

    pub fn current(&self) -> &ImageId {
        &self.images[self.current_index]
    }

    #[allow(dead_code)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::new(
            ["car", "banana", "cat", "plane"]
                .into_iter()
                .map(ImageId::from)
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_gallery_is_rejected() {
        assert_eq!(Gallery::new(vec![]), Err(GalleryError::Empty));
    }

    #[test]
    fn test_starts_at_first_image() {
        let gallery = gallery();
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.current().as_str(), "car");
    }

    #[test]
    fn test_retreat_from_first_wraps_to_last() {
        let mut gallery = gallery();
        gallery.retreat();
        assert_eq!(gallery.current_index(), 3);
        assert_eq!(gallery.current().as_str(), "plane");
    }

    #[test]
    fn test_advance_from_last_wraps_to_first() {
        let mut gallery = gallery();
        gallery.step(Direction::Backward);
        gallery.step(Direction::Forward);
        assert_eq!(gallery.current().as_str(), "car");
    }

    #[test]
    fn test_n_advances_land_modulo_size() {
        for start in 0..4 {
            for n in 0..10 {
                let mut gallery = gallery();
                for _ in 0..start {
                    gallery.advance();
                }
                for _ in 0..n {
                    gallery.advance();
                }
                assert_eq!(gallery.current_index(), (start + n) % gallery.len());
            }
        }
    }

    #[test]
    fn test_n_retreats_land_modulo_size() {
        for start in 0..4 {
            for n in 0..10 {
                let mut gallery = gallery();
                for _ in 0..start {
                    gallery.advance();
                }
                for _ in 0..n {
                    gallery.retreat();
                }
                let expected = (start as i64 - n as i64).rem_euclid(4) as usize;
                assert_eq!(gallery.current_index(), expected);
            }
        }
    }

    #[test]
    fn test_single_image_gallery_stays_put() {
        let mut gallery = Gallery::new(vec![ImageId::from("cat")]).unwrap();
        gallery.advance();
        gallery.retreat();
        assert_eq!(gallery.current().as_str(), "cat");
    }
}
