//! Docs Example - a small documentation browser
//!
//! This example demonstrates:
//! - Screen routing with `dynamic`
//! - Re-bounding and refocusing from press actions
//! - A scroll view locked with Enter and released with Esc
//! - An animated banner
//!
//! Keys: arrows move, Enter presses, Esc releases a scroll lock, Ctrl+C quits.
//!
//! Run with: cargo run --example docs

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tad::{
    border, button, dynamic, hstack, scroll, text, vstack, Animate, App, Blank, Bounds, HStack,
    Navigator, Node, Text, VStack, Width,
};

/// Columns taken by the route menu.
const MENU_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Home,
    Introduction,
    AppBuilder,
}

impl Route {
    const ALL: [Route; 3] = [Route::Home, Route::Introduction, Route::AppBuilder];

    fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Introduction => "introduction",
            Route::AppBuilder => "App",
        }
    }
}

fn home_bounds() -> Bounds {
    Bounds::new(0..=0, 0..=0)
}

/// Menu buttons sit in column 1, the scroll view in column 2.
fn page_bounds() -> Bounds {
    Bounds::new(0..=Route::ALL.len() as i32 - 1, 1..=2)
}

fn banner() -> Animate {
    let frames = [
        vec![
            " _            _ ",
            "| |_ __ _  __| |",
            "| __/ _` |/ _` |",
            "| || (_| | (_| |",
            " \\__\\__,_|\\__,_|",
        ],
        vec![
            " _            _ ",
            "| |_ __ _  __| |",
            "| __/ _` |/ _` |",
            "| || (_| | (_| |",
            " /__/__,_|/__,_|",
        ],
    ];
    Animate::new(frames).delay(Duration::from_millis(500))
}

fn home_screen(nav: &mut Navigator, route: &Rc<Cell<Route>>) -> tad::Result<VStack> {
    let route = route.clone();
    let explore = button("Explore the docs").at((0, 0)).on_press(nav, move |nav| {
        route.set(Route::Introduction);
        nav.set_bounds(page_bounds());
        nav.set_focus((0, 1));
    })?;

    Ok(vstack()
        .center()
        .vgap(2)
        .add(banner())
        .add(text([
            "This is an example tad application.",
            "",
            "Its source lives in demos/docs.rs.",
        ]))
        .add(explore))
}

fn introduction() -> VStack {
    vstack()
        .add(text("Introduction").bold())
        .add(Blank(2))
        .add(text("What is tad?").bold())
        .add(Blank(1))
        .extend((1..=40).map(|n| Text::from(format!("{n:>2}. tad is a toolkit that renders text!"))))
}

fn app_builder() -> Text {
    text([
        "App::new(nav)",
        "    .title(..)    bold yellow line above the root",
        "    .bound(..)    region arrow keys may move focus into",
        "    .root(..)     the node rendered every frame",
        "    .run()        take over the terminal until Ctrl+C",
    ])
}

fn doc_screen(nav: &mut Navigator, route: &Rc<Cell<Route>>, cols: usize, rows: usize) -> tad::Result<HStack> {
    let current = route.clone();
    let mut entries = Vec::with_capacity(Route::ALL.len());
    for (index, target) in Route::ALL.into_iter().enumerate() {
        let route = route.clone();
        entries.push(button(target.name()).at((index as i32, 1)).on_press(nav, move |nav| {
            route.set(target);
            if target == Route::Home {
                nav.set_bounds(home_bounds());
                nav.set_focus((0, 0));
            }
        })?);
    }
    let menu = vstack()
        .add(Text::dynamic(move || vec![format!("> {}", current.get().name())]).bold())
        .add(Blank(1))
        .extend(entries);

    let intro: Rc<dyn Node> = Rc::new(introduction());
    let builder: Rc<dyn Node> = Rc::new(app_builder());
    let current = route.clone();
    let content = dynamic(move || match current.get() {
        Route::AppBuilder => builder.clone(),
        Route::Home | Route::Introduction => intro.clone(),
    });

    // Title line, blank line and the border's top and bottom rows.
    let height = rows.saturating_sub(4);
    let mut body = scroll(nav, "doc", height, content);
    for index in 0..Route::ALL.len() {
        body = body.select(nav, (index as i32, 2));
    }

    Ok(hstack()
        .add(border().width(Width::Chars(MENU_WIDTH)).hgap(1).child(menu))
        .add(border().width(Width::Chars(cols.saturating_sub(MENU_WIDTH))).child(body)))
}

fn main() -> tad::Result<()> {
    let (cols, rows) = crossterm::terminal::size().map_or((100, 30), |(c, r)| (c as usize, r as usize));

    let mut nav = Navigator::new();
    let route = Rc::new(Cell::new(Route::Home));

    let home: Rc<dyn Node> = Rc::new(home_screen(&mut nav, &route)?);
    let page: Rc<dyn Node> = Rc::new(doc_screen(&mut nav, &route, cols, rows)?);

    let current = route.clone();
    let router = dynamic(move || match current.get() {
        Route::Home => home.clone(),
        Route::Introduction | Route::AppBuilder => page.clone(),
    });

    App::new(nav).title("tad docs").bound(home_bounds()).root(router).run()
}
