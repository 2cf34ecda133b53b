use std::time::Duration;

pub const HERO_AUTO_ADVANCE: Duration = Duration::from_secs(7);
pub const TESTIMONIALS_AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Slide position owned by a single slider. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Moves by `direction` slides and returns the new index.
    pub fn step(&mut self, direction: isize) -> usize {
        if self.len == 0 {
            return self.index;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
        self.index
    }

    /// Horizontal track offset, as a percentage of one slide width.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test_case(4, 1, 1)]
    #[test_case(4, 5, 1)]
    #[test_case(4, -1, 3)]
    #[test_case(4, -9, 3)]
    #[test_case(1, 1, 0)]
    fn test_step(len: usize, direction: isize, expected: usize) {
        let mut carousel = Carousel::new(len);
        assert_eq!(carousel.step(direction), expected);
    }

    #[test]
    fn test_empty_carousel_is_noop() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_offset_follows_index() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.offset_percent(), 200);
    }
}
