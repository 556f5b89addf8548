use menu_core::{CourseFilter, MenuItem};

use crate::app::{App, Notice, Screen};

const TABS: [(Screen, &str); 3] =
    [(Screen::Home, "Home"), (Screen::Menu, "Menu"), (Screen::Filter, "Filter")];

/// Draws the whole screen as text, ending with a prompt line.
pub fn render(app: &App) -> String {
    let mut lines = Vec::new();

    lines.push(tab_bar(app.screen));
    if let Some(notice) = &app.notice {
        match notice {
            Notice::Info(message) => lines.push(message.clone()),
            Notice::Error(message) => lines.push(format!("! {message}")),
        }
    }
    lines.push(String::new());

    match app.screen {
        Screen::Home => render_home(app, &mut lines),
        Screen::Menu => render_menu(app, &mut lines),
        Screen::Filter => render_filter(app, &mut lines),
    }

    lines.push(String::new());
    lines.push("> ".to_string());
    lines.join("\n")
}

fn tab_bar(active: Screen) -> String {
    TABS.iter()
        .map(|(screen, label)| {
            if *screen == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_price(currency: &str, price: f64) -> String {
    format!("{currency} {price:.2}")
}

fn item_card(app: &App, item: &MenuItem, lines: &mut Vec<String>) {
    lines.push(format!("{:<32} {:>12}", item.name, format_price(&app.currency, item.price)));
    lines.push(format!("  {}", item.description));
}

fn render_home(app: &App, lines: &mut Vec<String>) {
    let catalog = app.store().catalog();

    if catalog.is_empty() {
        lines.push("No menu items available.".to_string());
    } else {
        lines.push("Menu Summary:".to_string());
        lines.push(format!("Total of {} menu items to choose from", catalog.len()));
        for (course, summary) in catalog.summary() {
            lines.push(format!(
                "{course}: {} dishes | Avg Price: {}",
                summary.count,
                format_price(&app.currency, summary.average_price)
            ));
        }
    }

    for item in catalog {
        lines.push(String::new());
        item_card(app, item, lines);
    }

    lines.push(String::new());
    lines.push("(+) `menu` to add a dish".to_string());
}

fn render_menu(app: &App, lines: &mut Vec<String>) {
    let form = &app.form;
    let course = if form.course.trim().is_empty() { "Select Course" } else { form.course.as_str() };

    lines.push(format!("{:<13}{}", "Dish Name:", form.name));
    lines.push(format!("{:<13}{}", "Description:", form.description));
    lines.push(format!("{:<13}{}", "Course:", course));
    lines.push(format!("{:<13}{}", "Price:", form.price));
    lines.push("[ SAVE ITEM ]  `save`".to_string());

    for item in app.store().catalog() {
        lines.push(String::new());
        lines.push(format!("#{} {}", item.id, item.name));
        lines.push(format!("  {}", item.description));
        lines.push(format!("  [Delete]  `delete {}`", item.id));
    }
}

fn render_filter(app: &App, lines: &mut Vec<String>) {
    let buttons: Vec<_> = CourseFilter::CHOICES
        .iter()
        .map(|choice| {
            if *choice == app.filter {
                format!("[{}]", choice.label())
            } else {
                format!(" {} ", choice.label())
            }
        })
        .collect();
    lines.push(buttons.join(" "));

    let items = app.store().filter(app.filter);
    if items.is_empty() {
        lines.push(String::new());
        lines.push("No dishes to show.".to_string());
    }
    for item in items {
        lines.push(String::new());
        item_card(app, item, lines);
    }
}

#[cfg(test)]
mod test {
    use menu_core::{MenuItemForm, MenuStore};

    use super::*;

    fn app_with(dishes: &[(&str, &str, &str)]) -> App {
        let mut store = MenuStore::new();
        for (name, course, price) in dishes {
            let form = MenuItemForm::new(*name, format!("{name} description"), *course, *price);
            store.add(&form).unwrap();
        }
        App::new(store, "R", Screen::Home)
    }

    #[test]
    fn empty_home() {
        let screen = render(&app_with(&[]));
        assert!(screen.starts_with("[Home]  Menu   Filter "));
        assert!(screen.contains("No menu items available."));
        assert!(!screen.contains("Menu Summary:"));
    }

    #[test]
    fn home_summary() {
        let app =
            app_with(&[("Ribs", "Main", "100"), ("Fish", "Main", "200"), ("Cake", "Dessert", "50")]);
        let screen = render(&app);

        let summary: Vec<_> = screen.lines().skip(2).take(4).collect();
        assert_eq!(
            summary,
            vec![
                "Menu Summary:",
                "Total of 3 menu items to choose from",
                "Main: 2 dishes | Avg Price: R 150.00",
                "Dessert: 1 dishes | Avg Price: R 50.00",
            ]
        );
        assert!(screen.contains("Cake description"));
        assert!(screen.contains("R 200.00"));
    }

    #[test]
    fn averages_are_rounded_only_for_display() {
        let app =
            app_with(&[("A", "Starter", "10"), ("B", "Starter", "10"), ("C", "Starter", "11")]);
        assert!(render(&app).contains("Starter: 3 dishes | Avg Price: R 10.33"));
    }

    #[test]
    fn menu_form_placeholder_and_rows() {
        let mut app = app_with(&[("Soup", "Starter", "45")]);
        app.screen = Screen::Menu;
        let screen = render(&app);

        assert!(screen.contains("Course:      Select Course"));
        assert!(screen.contains("#1 Soup"));
        assert!(screen.contains("`delete 1`"));
    }

    #[test]
    fn filter_screen_shows_selected_course() {
        let mut app = app_with(&[("Soup", "Starter", "45"), ("Cake", "Dessert", "60")]);
        app.screen = Screen::Filter;
        app.filter = CourseFilter::Only(menu_core::Course::Dessert);
        let screen = render(&app);

        assert!(screen.contains(" All   Starter   Main  [Dessert]"));
        assert!(screen.contains("Cake"));
        assert!(!screen.contains("Soup"));
    }

    #[test]
    fn filter_screen_empty_course() {
        let mut app = app_with(&[("Soup", "Starter", "45")]);
        app.screen = Screen::Filter;
        app.filter = CourseFilter::Only(menu_core::Course::Main);
        assert!(render(&app).contains("No dishes to show."));
    }

    #[test]
    fn currency_prefix() {
        assert_eq!(format_price("R", 45.0), "R 45.00");
        assert_eq!(format_price("$", 3.456), "$ 3.46");
    }
}
