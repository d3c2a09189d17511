#[cfg(test)]
pub mod common;


#[cfg(test)]
mod test_field_rules;


#[cfg(test)]
mod test_damage_rules;


#[cfg(test)]
mod test_fallback;


#[cfg(test)]
mod test_format_description;

#[cfg(test)]
mod test_pipeline;
