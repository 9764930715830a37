/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::EPSILON;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::MIN_OVERHEAD;
#[doc(inline)]
pub use fpa::almost_ge;
#[doc(inline)]
pub use fpa::almost_le;
