use maud::{DOCTYPE, Markup, Render, html};

pub fn render_table<const N: usize>(
    overall_title: &'static str,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container" {
            (title(overall_title))
            table {
                thead {
                    tr {
                        @for title in titles {
                            th {(title)}
                        }
                    }
                }
                tbody {
                    @for row in items {
                        tr {
                            @for col in row {
                                td {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 {(s)}
    }
}

pub fn page(page_title: &str, head_extras: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8" {}
                meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                title { (page_title) }
                (head_extras)
            }
            body {
                (body)
            }
        }
    }
}
