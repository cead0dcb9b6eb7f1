/// A stream of uniform floats in `[0, 1)`.
///
/// Each worker owns its stream exclusively, so `&mut self` is enough and
/// nothing needs to be `Sync`.
pub trait Uniform {
    fn uniform(&mut self) -> f64;
}
