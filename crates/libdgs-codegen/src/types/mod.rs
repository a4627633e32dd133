mod builtin_scalar;
mod resolved_type;

pub use builtin_scalar::BuiltinScalar;
pub use builtin_scalar::map_to_target_type;
pub use resolved_type::ResolvedType;
pub use resolved_type::resolve;

#[cfg(test)]
mod tests;
