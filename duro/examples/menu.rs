//! Menu Example
//!
//! Drives a headless Menu, Tabs and Tooltip from the terminal:
//! - Enter/Space on the trigger opens the menu
//! - Up/Down/Home/End move the highlight, Enter activates, Escape closes
//! - Left/Right switch tabs while the menu is closed
//! - `h` toggles hover on the tooltip trigger (800ms delay)
//!
//! Press q to quit. Widget logs go to `menu.log`.

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, queue, style, terminal};
use duro::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// ============================================================================
// Widget tree
// ============================================================================

struct Demo {
    menu: Menu,
    trigger: MenuTrigger,
    popup: MenuPopup,
    items: Vec<MenuItem>,
    docs: MenuLinkItem,
    tabs: Tabs,
    tab_list: TabList,
    tab_parts: Vec<Tab>,
    tooltip: Tooltip,
    tooltip_trigger: TooltipTrigger,
    hovering: bool,
    status: Arc<Mutex<String>>,
}

impl Demo {
    fn new() -> Result<Self> {
        let status = Arc::new(Mutex::new(String::from("ready")));
        let root = ThemeProvider::new(ThemeName::Dark).provide(&Scope::new());

        let menu = Menu::new();
        let scope = menu.provide(&root);
        let trigger = MenuTrigger::mount(&scope)?;
        let popup = MenuPopup::mount(&scope, MenuAlign::Start)?;
        let items = ["Settings", "Profile", "Logout"]
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let status = Arc::clone(&status);
                let label = label.to_string();
                MenuItem::mount(&scope, i, label.clone()).map(|item| {
                    item.on_click(move || {
                        if let Ok(mut status) = status.lock() {
                            *status = format!("activated {}", label);
                        }
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let docs = MenuLinkItem::mount(&scope, 3, "Docs", "https://example.com/docs")?;

        let tabs = Tabs::new(TabsOptions::new().default_value("overview"));
        let tabs_scope = tabs.provide(&root);
        let tab_list = TabList::mount(&tabs_scope)?;
        let tab_parts = [("overview", false), ("activity", false), ("billing", true)]
            .iter()
            .enumerate()
            .map(|(i, (value, disabled))| Tab::mount(&tabs_scope, i, *value, *disabled))
            .collect::<Result<Vec<_>>>()?;

        let tooltip = Tooltip::new(TooltipOptions::new("Opens the account menu").delay_ms(800));
        let tooltip_trigger = TooltipTrigger::mount(&tooltip.provide(&root))?;

        Ok(Self {
            menu,
            trigger,
            popup,
            items,
            docs,
            tabs,
            tab_list,
            tab_parts,
            tooltip,
            tooltip_trigger,
            hovering: false,
            status,
        })
    }

    fn handle_key(&mut self, key: KeyCombo) -> Result<()> {
        if key.key == Key::Char('h') {
            self.hovering = !self.hovering;
            if self.hovering {
                self.tooltip_trigger.pointer_enter()?;
            } else {
                self.tooltip_trigger.pointer_leave();
            }
            return Ok(());
        }

        let result = if self.menu.is_open() {
            self.popup.handle_key(&key)
        } else {
            match self.trigger.handle_key(&key) {
                EventResult::Ignored => self.tab_list.handle_key(&key),
                handled => handled,
            }
        };
        self.menu.settle();
        log::debug!("key {:?} -> {:?}", key.key, result);

        if let Some(href) = self.menu.take_navigation() {
            if let Ok(mut status) = self.status.lock() {
                *status = format!("navigate to {}", href);
            }
        }
        Ok(())
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let mut lines = Vec::new();

        let expanded = self.trigger.attrs().get("aria-expanded") == Some("true");
        lines.push(format!("[ Account {} ]", if expanded { "▴" } else { "▾" }));
        if self.popup.is_rendered() {
            for item in &self.items {
                let marker = if item.is_highlighted() { ">" } else { " " };
                lines.push(format!("  {} {}", marker, item.label()));
            }
            let marker = if self.docs.is_highlighted() { ">" } else { " " };
            lines.push(format!("  {} Docs -> {}", marker, self.docs.href()));
        }
        if self.tooltip.is_open() {
            lines.push(format!("  ({})", self.tooltip.content()));
        }

        lines.push(String::new());
        let tabs: Vec<String> = self
            .tab_parts
            .iter()
            .map(|tab| match (tab.is_active(), tab.is_disabled()) {
                (true, _) => format!("[{}]", tab.value()),
                (false, true) => format!(" ~{}~ ", tab.value()),
                (false, false) => format!(" {} ", tab.value()),
            })
            .collect();
        lines.push(tabs.join(" "));
        lines.push(format!("panel: {}", self.tabs.value().unwrap_or_default()));

        lines.push(String::new());
        let status = self.status.lock().map(|s| s.clone()).unwrap_or_default();
        lines.push(format!("status: {}", status));
        lines.push("Enter open/activate  arrows move  h hover  q quit".to_string());

        for (row, line) in lines.iter().enumerate() {
            queue!(out, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }
        out.flush()
    }
}

// ============================================================================
// Main loop
// ============================================================================

async fn run(demo: &mut Demo) -> io::Result<()> {
    let mut out = io::stdout();
    loop {
        demo.render(&mut out)?;

        // Poll briefly so the tooltip timer gets to run between key presses.
        if !event::poll(Duration::from_millis(50))? {
            tokio::time::sleep(Duration::from_millis(10)).await;
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') {
                return Ok(());
            }
            if let Err(e) = demo.handle_key(key.into()) {
                log::error!("key handling failed: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("menu.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut demo = match Demo::new() {
        Ok(demo) => demo,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = run(&mut demo).await;
    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
