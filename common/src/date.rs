//! Formato del campo `fecha` (es-MX, `dd/mm/aaaa`)

pub fn format_fecha(year: i32, month: u32, day: u32) -> String {
    format!("{:02}/{:02}/{:04}", day, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fecha() {
        assert_eq!(format_fecha(2026, 3, 7), "07/03/2026");
        assert_eq!(format_fecha(2026, 12, 31), "31/12/2026");
    }
}
