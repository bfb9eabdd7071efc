use common::Pollutant;

/// Prints every form field in wire order with its label.
pub fn list_fields() {
    for pollutant in Pollutant::ALL {
        println!("{:<8} {}", pollutant.key(), pollutant.label());
    }
}
