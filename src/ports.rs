// Ports - アプリケーションとライブラリの境界を定義

pub mod provided;
pub mod required;

pub use provided::*;
pub use required::*;
