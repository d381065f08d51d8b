// bool, char, u8 - u64, i8 - i64, f32, f64, usize, isize
mod native_basic;

// &'static str
mod native_str;

// ()
mod native_unit;

// [T; N]
mod native_array;
