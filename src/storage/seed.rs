use super::record::CountryRecord;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Records written to a fresh store on first run, in on-disk order.
pub fn seed_records() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("Azerbaijan".to_string(), "Azərbaycan Respublikası".to_string())
            .with_rights(strings(&[
                "Həyat hüququ (Konstitusiya, maddə 27)",
                "Şəxsi hüquqların toxunulmazlığı (maddə 28)",
                "Düşüncə və vicdan azadlığı (maddə 47)",
                "Söz azadlığı (maddə 48)",
                "Toplantı azadlığı (maddə 49)",
                "Məlumat almaq hüququ (maddə 50)",
                "Əmək hüququ və iş seçmək azadlığı (maddə 35)",
                "Təhsil hüququ (maddə 42)",
                "Səhiyyə qayğısı hüququ (maddə 41)",
                "Mülkiyyət hüququ (maddə 29)",
            ]))
            .with_duties(strings(&[
                "Qanunlara riayət etmək",
                "Vergi ödəmək",
                "Ölkəni müdafiə etmək",
                "Təbiəti qorumaq",
                "Digər insanların hüquqlarına hörmət etmək",
                "Dövlət simvollarına hörmət etmək",
            ]))
            .with_sources(strings(&[
                "Azərbaycan Respublikasının Konstitusiyası",
                "Əmək Məcəlləsi",
                "Vətəndaş Məcəlləsi",
                "İnzibati Xətalar Məcəlləsi",
            ]))
            .with_last_updated("2024-01-15"),
        CountryRecord::new("Turkey".to_string(), "Türkiyə Respublikası".to_string())
            .with_rights(strings(&[
                "Həyat hüququ (Konstitusiya, maddə 17)",
                "Şəxsi hürriyyət və təhlükəsizlik hüququ (maddə 19)",
                "Düşüncə və din azadlığı (maddə 24-25)",
                "Söz və ifadə azadlığı (maddə 26)",
                "Təşkilatlanma azadlığı (maddə 33)",
                "Əmək hüququ (maddə 49)",
                "Təhsil hüququ (maddə 42)",
                "Səhiyyə hüququ (maddə 56)",
                "Sosial təminat hüququ (maddə 60)",
            ]))
            .with_duties(strings(&[
                "Vergi ödəmək",
                "Seçki hüququ və vəzifəsi",
                "Hərbi xidmət",
                "Qanunlara riayət etmək",
                "İctimai xidmət",
            ]))
            .with_sources(strings(&["Türkiyə Respublikası Konstitusiyası"]))
            .with_last_updated("2024-01-10"),
        CountryRecord::new("USA".to_string(), "Amerika Birləşmiş Ştatları".to_string())
            .with_rights(strings(&[
                "Söz azadlığı (Birinci Düzəliş)",
                "Silah daşımaq hüququ (İkinci Düzəliş)",
                "Ədalətli mühakimə hüququ (Beşinci Düzəliş)",
                "Sürətli və ədalətli mühakimə (Altıncı Düzəliş)",
                "Vicdan azadlığı (Birinci Düzəliş)",
                "Şəxsi həyat hüququ (Dördüncü Düzəliş)",
                "İnsanlıq ləyaqəti",
                "Bərabər müdafiə",
            ]))
            .with_duties(strings(&[
                "Seçkilərdə iştirak",
                "Məhkəməyə şahidlik",
                "Vergi ödəmək",
                "Federal qanunlara riayət",
                "Yerli qanunlara riayət",
            ]))
            .with_sources(strings(&[
                "ABŞ Konstitusiyası",
                "Federal Qanunlar",
                "Ştat Konstitusiyaları",
            ]))
            .with_last_updated("2024-01-05"),
    ]
}
