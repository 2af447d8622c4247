mod city;
mod country;
mod region;

pub use city::City;
pub use country::Country;
pub use region::Region;
