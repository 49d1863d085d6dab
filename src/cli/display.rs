use std::io::{self, Write};
use crate::query::{Comparison, SearchHit};
use crate::storage::{CountryRecord, RecordStore};

/// Common rights shown per country pair before collapsing into a count.
pub const COMPARISON_PREVIEW: usize = 3;

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", rule('=', 60))?;
    writeln!(out, "HÜQUQ VƏ VƏZİFƏLƏR MƏLUMAT SİSTEMİ")?;
    writeln!(out, "{}", rule('=', 60))?;
    writeln!(out, "1. Ölkələri siyahıla")?;
    writeln!(out, "2. Ölkə məlumatlarını göstər")?;
    writeln!(out, "3. Yeni ölkə əlavə et")?;
    writeln!(out, "4. Açar sözə görə axtar")?;
    writeln!(out, "5. Çıxış")?;
    writeln!(out, "{}", rule('=', 60))
}

pub fn write_add_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n➕ YENİ ÖLKƏ ƏLAVƏ ET")?;
    writeln!(out, "{}", rule('-', 40))
}

pub fn write_country_list<W: Write>(out: &mut W, store: &RecordStore) -> io::Result<()> {
    writeln!(out, "\n{}", rule('=', 50))?;
    writeln!(out, "MÖVCUD ÖLKƏLƏRİN SİYAHISI:")?;
    writeln!(out, "{}", rule('=', 50))?;
    for (i, record) in store.iter().enumerate() {
        writeln!(out, "{}. {} - {}", i + 1, record.name, record.description)?;
    }
    writeln!(out, "{}", rule('=', 50))
}

pub fn write_country_info<W: Write>(out: &mut W, record: &CountryRecord) -> io::Result<()> {
    writeln!(out, "\n{}", rule('═', 60))?;
    writeln!(out, "ÖLKƏ: {}", record.name)?;
    writeln!(out, "Təsvir: {}", record.description)?;
    writeln!(out, "Son yenilənmə: {}", record.last_updated)?;
    writeln!(out, "{}", rule('═', 60))?;

    writeln!(out, "\n📜 HÜQUQLAR:")?;
    writeln!(out, "{}", rule('-', 40))?;
    for (i, right) in record.rights.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, right)?;
    }

    writeln!(out, "\n⚖️ VƏZİFƏLƏR:")?;
    writeln!(out, "{}", rule('-', 40))?;
    for (i, duty) in record.duties.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, duty)?;
    }

    writeln!(out, "\n📚 MƏNBƏLƏR:")?;
    writeln!(out, "{}", rule('-', 40))?;
    for source in &record.sources {
        writeln!(out, "• {}", source)?;
    }
    writeln!(out, "{}", rule('═', 60))
}

pub fn write_not_found<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "\n⚠️ '{}' adlı ölkə məlumat bazasında tapılmadı.", name)
}

pub fn write_comparison<W: Write>(
    out: &mut W,
    selected: &str,
    comparisons: &[Comparison],
) -> io::Result<()> {
    writeln!(out, "\n🔍 MÜQAYISƏ (Digər ölkələrlə):")?;
    writeln!(out, "{}", rule('-', 50))?;

    for comparison in comparisons {
        writeln!(out, "\n{} və {} arasında ortaq hüquqlar:", selected, comparison.other)?;
        for right in comparison.common.iter().take(COMPARISON_PREVIEW) {
            writeln!(out, "  ✓ {}", right)?;
        }
        if comparison.common.len() > COMPARISON_PREVIEW {
            let rest = comparison.common.len() - COMPARISON_PREVIEW;
            writeln!(out, "  ... və daha {} ortaq hüquq", rest)?;
        }
    }
    Ok(())
}

pub fn write_search_results<W: Write>(
    out: &mut W,
    keyword: &str,
    hits: &[SearchHit],
) -> io::Result<()> {
    writeln!(out, "\n'{}' üçün nəticələr:", keyword)?;
    writeln!(out, "{}", rule('-', 50))?;

    if hits.is_empty() {
        return writeln!(out, "❌ Heç bir nəticə tapılmadı.");
    }

    for hit in hits {
        writeln!(out, "\n📌 {}:", hit.country)?;
        if !hit.rights.is_empty() {
            writeln!(out, "  Hüquqlar:")?;
            for right in &hit.rights {
                writeln!(out, "    • {}", right)?;
            }
        }
        if !hit.duties.is_empty() {
            writeln!(out, "  Vəzifələr:")?;
            for duty in &hit.duties {
                writeln!(out, "    • {}", duty)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn numbered_lines(text: &str) -> usize {
        text.lines()
            .filter(|line| {
                let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
                !digits.is_empty() && line[digits.len()..].starts_with(". ")
            })
            .count()
    }

    #[test]
    fn test_country_info_enumerates_rights_and_duties() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("store.json")).unwrap();
        let record = store.get("Azerbaijan").unwrap();

        let text = render(|out| write_country_info(out, record));
        assert_eq!(numbered_lines(&text), 16);
        assert!(text.contains("10. Mülkiyyət hüququ (maddə 29)"));
        assert!(text.contains("6. Dövlət simvollarına hörmət etmək"));
        assert!(text.contains("• İnzibati Xətalar Məcəlləsi"));
        assert!(text.contains("Son yenilənmə: 2024-01-15"));
    }

    #[test]
    fn test_country_list_is_one_indexed() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("store.json")).unwrap();

        let text = render(|out| write_country_list(out, &store));
        assert!(text.contains("1. Azerbaijan - Azərbaycan Respublikası"));
        assert!(text.contains("2. Turkey - Türkiyə Respublikası"));
        assert!(text.contains("3. USA - Amerika Birləşmiş Ştatları"));
    }

    #[test]
    fn test_add_header_uses_short_rule() {
        let text = render(|out| write_add_header(out));
        assert_eq!(text, format!("\n➕ YENİ ÖLKƏ ƏLAVƏ ET\n{}\n", "-".repeat(40)));
    }

    #[test]
    fn test_comparison_truncates_to_preview() {
        let comparisons = vec![Comparison {
            other: "B".to_string(),
            common: (1..=5).map(|i| format!("r{}", i)).collect(),
        }];

        let text = render(|out| write_comparison(out, "A", &comparisons));
        assert!(text.contains("A və B arasında ortaq hüquqlar:"));
        assert!(text.contains("  ✓ r3"));
        assert!(!text.contains("  ✓ r4"));
        assert!(text.contains("... və daha 2 ortaq hüquq"));
    }

    #[test]
    fn test_comparison_exactly_preview_has_no_remainder() {
        let comparisons = vec![Comparison {
            other: "B".to_string(),
            common: vec!["x".to_string(), "y".to_string(), "z".to_string()],
        }];

        let text = render(|out| write_comparison(out, "A", &comparisons));
        assert!(!text.contains("daha"));
    }

    #[test]
    fn test_search_results_no_results() {
        let text = render(|out| write_search_results(out, "kosmos", &[]));
        assert!(text.contains("'kosmos' üçün nəticələr:"));
        assert!(text.contains("Heç bir nəticə tapılmadı"));
    }

    #[test]
    fn test_search_results_skip_empty_groups() {
        let hits = vec![SearchHit {
            country: "USA".to_string(),
            rights: Vec::new(),
            duties: vec!["Vergi ödəmək".to_string()],
        }];

        let text = render(|out| write_search_results(out, "vergi", &hits));
        assert!(text.contains("📌 USA:"));
        assert!(!text.contains("Hüquqlar:"));
        assert!(text.contains("    • Vergi ödəmək"));
    }
}
