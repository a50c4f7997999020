pub mod button;
pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use radio::{Radio, RadioGroup, RadioOption};
pub use select::Select;
