//! Fixed reference material shown alongside the calculator.

pub const TITLE: &str = "Neff's Anterior Coefficient Analysis";

pub const SUBTITLE: &str = "Calculate the anterior coefficient for occlusion assessment";

pub const REFERENCE_TEXT: &str = r#"NEFF'S ANTERIOR COEFFICIENT ANALYSIS INFORMATION

Measurement Instructions:
1. Measure the mesiodistal width of each tooth at its greatest contour
2. Use a digital caliper or Boley gauge for accurate measurements
3. Record to the nearest 0.1 mm
4. Measure both left and right teeth and sum the widths

Parameters:
- Maxillary Teeth: Central incisors (11,21) and canines (13,23)
- Mandibular Teeth: Central incisors (31,41) and canines (33,43)
- Anterior Coefficient = (Mandibular Sum) / (Maxillary Sum)

Ideal Values (based on Neff's studies):
Maxillary Teeth:
- Central Incisors (11,21): 8.5 mm (range 7.5-9.5 mm)
- Canines (13,23): 7.6 mm (range 7.0-8.2 mm)

Mandibular Teeth:
- Central Incisors (31,41): 5.0 mm (range 4.5-5.5 mm)
- Canines (33,43): 6.5 mm (range 6.0-7.0 mm)

Ideal Anterior Coefficient:
- Normal range: 1.20 to 1.22
- Associated with normal overbite of approximately 20%

Interpretation Guidelines:
- Coefficient 1.20-1.22: Ideal relationship
- Coefficient < 1.20: May result in:
  - Excessive overbite
  - Deep bite tendencies
  - Anterior crowding
- Coefficient > 1.22: May result in:
  - Reduced overbite
  - Open bite tendencies
  - Anterior spacing

Clinical Significance:
- Helps predict overbite characteristics
- Useful for treatment planning in cases with:
  - Deep bites or open bites
  - Anterior crowding or spacing
  - Tooth-size discrepancies
- Particularly valuable for:
  - Early treatment planning
  - Space analysis
  - Extraction decisions

Technique Notes:
1. Measure multiple teeth when possible
2. Consider tooth morphology and wear patterns
3. Combine with other diagnostic tools (cephalometrics, study models)
4. Always verify clinically before making treatment decisions

Common Findings:
- High coefficients often seen with:
  - Small maxillary teeth
  - Large mandibular teeth
  - Open bite tendencies
- Low coefficients often seen with:
  - Large maxillary teeth
  - Small mandibular teeth
  - Deep bite tendencies
"#;

/// The upper-case first line of the reference text.
pub fn banner() -> &'static str {
    REFERENCE_TEXT.lines().next().unwrap_or(TITLE)
}

/// Splits the reference text into `(heading, body)` pairs on its
/// colon-terminated section headings.
pub fn sections() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut out: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
    for line in REFERENCE_TEXT.lines().skip(1) {
        if line.is_empty() {
            continue;
        }
        let is_heading = line.ends_with(':')
            && !line.starts_with(' ')
            && !line.starts_with('-')
            && !line.starts_with(char::is_numeric);
        if is_heading || out.is_empty() {
            out.push((line.trim_end_matches(':'), Vec::new()));
        } else if let Some((_, body)) = out.last_mut() {
            body.push(line);
        }
    }
    out
}
