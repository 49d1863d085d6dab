use std::io::{self, BufRead, Stdout, StdinLock, Write};
use chrono::Local;
use tracing::{debug, error};
use crate::query::{compare_with_others, normalize_keyword, search_normalized};
use crate::storage::{CountryRecord, RecordStore, StoreError};
use super::display;
use super::prompt::{collect_until_blank, prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Show,
    Add,
    Search,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Show),
            "3" => Some(MenuChoice::Add),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Menu-driven console over a [`RecordStore`].
pub struct CLI<R, W> {
    store: RecordStore,
    input: R,
    output: W,
}

impl CLI<StdinLock<'static>, Stdout> {
    pub fn new(store: RecordStore) -> Self {
        CLI::with_io(store, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CLI<R, W> {
    pub fn with_io(store: RecordStore, input: R, output: W) -> Self {
        CLI { store, input, output }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            display::write_menu(&mut self.output)?;

            let Some(choice) = self.ask("Seçiminiz (1-5): ")? else {
                debug!("Input closed, leaving menu loop");
                break;
            };
            debug!(choice = %choice, "Menu selection");

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::List) => display::write_country_list(&mut self.output, &self.store)?,
                Some(MenuChoice::Show) => self.show_country()?,
                Some(MenuChoice::Add) => self.add_country()?,
                Some(MenuChoice::Search) => self.search_keyword()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "\n✨ Proqramdan çıxılır... Sağ olun!")?;
                    break;
                }
                None => writeln!(self.output, "\n❌ Yanlış seçim! 1-5 arası rəqəm daxil edin.")?,
            }

            if self.ask("\n🔽 Davam etmək üçün Enter düyməsini basın...")?.is_none() {
                break;
            }
        }
        self.output.flush()
    }

    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        prompt(&mut self.input, &mut self.output, message)
    }

    fn ask_or_empty(&mut self, message: &str) -> io::Result<String> {
        Ok(self.ask(message)?.unwrap_or_default())
    }

    fn show_country(&mut self) -> io::Result<()> {
        display::write_country_list(&mut self.output, &self.store)?;
        let name = self.ask_or_empty("\nÖlkə adını daxil edin: ")?;

        match self.store.get(&name) {
            Some(record) => {
                display::write_country_info(&mut self.output, record)?;
                let comparisons = compare_with_others(&self.store, &name);
                display::write_comparison(&mut self.output, &name, &comparisons)
            }
            None => display::write_not_found(&mut self.output, &name),
        }
    }

    fn add_country(&mut self) -> io::Result<()> {
        display::write_add_header(&mut self.output)?;

        let name = self.ask_or_empty("Ölkənin adı: ")?;
        if self.store.contains(&name) {
            return writeln!(self.output, "⚠️ Bu ölkə artıq mövcuddur!");
        }
        if name.is_empty() {
            return writeln!(self.output, "⚠️ Ölkənin adı boş ola bilməz!");
        }

        let description = self.ask_or_empty("Qısa təsvir: ")?;

        writeln!(self.output, "\nHüquqları daxil edin (hər sətrə bir, boş sətir bitirmək üçün):")?;
        let rights = collect_until_blank(&mut self.input, &mut self.output, "Hüquq")?;

        writeln!(self.output, "\nVəzifələri daxil edin:")?;
        let duties = collect_until_blank(&mut self.input, &mut self.output, "Vəzifə")?;

        writeln!(self.output, "\nMənbələri daxil edin:")?;
        let sources = collect_until_blank(&mut self.input, &mut self.output, "Mənbə")?;

        let record = CountryRecord::new(name.clone(), description)
            .with_rights(rights)
            .with_duties(duties)
            .with_sources(sources)
            .with_last_updated(today());

        match self.store.add(record) {
            Ok(()) => writeln!(self.output, "\n✅ '{}' ölkəsi uğurla əlavə edildi!", name),
            Err(StoreError::DuplicateCountry(_)) => writeln!(self.output, "⚠️ Bu ölkə artıq mövcuddur!"),
            Err(e) => {
                error!(country = %name, error = %e, "Failed to save new country");
                writeln!(self.output, "\n❌ Ölkə yadda saxlanılmadı: {}", e)
            }
        }
    }

    fn search_keyword(&mut self) -> io::Result<()> {
        let raw = self.ask_or_empty("\n🔎 Axtarış sözünü daxil edin: ")?;
        let keyword = normalize_keyword(&raw);
        let hits = search_normalized(&self.store, &keyword);
        display::write_search_results(&mut self.output, &keyword, &hits)
    }
}

/// Local calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
