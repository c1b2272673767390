// Drawing operations the particle field needs from whatever it renders onto.
// The browser implementation lives in `renderer`; tests use `RecordingSurface`.

use crate::color::Color;

pub trait Surface {
    type Error;

    fn size(&self) -> [f64; 2];

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
pub mod testing {
    use super::Surface;
    use crate::color::Color;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear { width: f64, height: f64 },
        Circle { center: [f64; 2], radius: f64, alpha: f64 },
        Line { from: [f64; 2], to: [f64; 2], alpha: f64 },
    }

    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> Self {
            RecordingSurface {
                width,
                height,
                calls: Vec::new(),
            }
        }

        pub fn lines(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Line { .. }))
                .collect()
        }

        pub fn circles(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Circle { .. }))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn size(&self) -> [f64; 2] {
            [self.width, self.height]
        }

        fn clear_rect(
            &mut self,
            _x: f64,
            _y: f64,
            width: f64,
            height: f64,
        ) -> Result<(), Infallible> {
            self.calls.clear();
            self.calls.push(DrawCall::Clear { width, height });
            Ok(())
        }

        fn fill_circle(
            &mut self,
            center: [f64; 2],
            radius: f64,
            _color: Color,
            alpha: f64,
        ) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                alpha,
            });
            Ok(())
        }

        fn stroke_line(
            &mut self,
            from: [f64; 2],
            to: [f64; 2],
            _color: Color,
            alpha: f64,
            _width: f64,
        ) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Line { from, to, alpha });
            Ok(())
        }
    }
}
