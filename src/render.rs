use crate::{dom::Element, resolver::Commit, resolver::Status};

const AVATAR_SIZE: &str = "20";

/// Renders `status` into `mount`.
///
/// Content is appended; rendering the same mount point twice duplicates it.
pub fn render(status: &Status, mount: &mut Element) {
    let mut header = Element::new("header");
    let mut link = Element::new("a")
        .with_attribute("href", status.url())
        .with_attribute("target", "_blank");

    if status.is_green() {
        header.set_class_name("green");
        link.set_text_content("Build is green");
        header.append_child(link);
        mount.append_child(header);
        return;
    }

    header.set_class_name("red");
    link.set_text_content("Build is broken");
    header.append_child(link);
    mount.append_child(header);

    if let Some(commits) = status.commits() {
        let list = mount.append_child(Element::new("div").with_class("commits"));
        list.append_child(
            Element::new("p")
                .with_class("message")
                .with_text("Potential first commits to break the build:"),
        );

        for commit in commits {
            list.append_child(commit_row(commit));
        }
    }
}

fn commit_row(commit: &Commit) -> Element {
    let mut row = Element::new("div").with_class("commit");

    let mut author = match &commit.author_url {
        Some(url) => Element::new("a")
            .with_class("author")
            .with_attribute("href", url.as_str())
            .with_attribute("target", "_blank"),
        None => Element::new("span").with_class("author"),
    };

    if let Some(avatar_url) = &commit.avatar_url {
        author.append_child(
            Element::new("img")
                .with_class("avatar")
                .with_attribute("height", AVATAR_SIZE)
                .with_attribute("width", AVATAR_SIZE)
                .with_attribute("alt", format!("@{}", commit.author))
                .with_attribute("src", avatar_url.as_str()),
        );
    }
    author.append_child(
        Element::new("span")
            .with_class("name")
            .with_text(commit.author.as_str()),
    );
    row.append_child(author);

    row.append_child(
        Element::new("a")
            .with_class("message")
            .with_attribute("href", commit.url.as_str())
            .with_attribute("target", "_blank")
            .with_text(commit.message.as_str()),
    );

    row
}

#[cfg(test)]
mod test {
    use super::render;
    use crate::{
        dom::Element,
        resolver::{Commit, Status},
    };

    fn mount() -> Element {
        Element::new("div").with_attribute("id", "main")
    }

    fn commit(sha: &str, login: &str, message: &str) -> Commit {
        Commit {
            sha: sha.to_owned(),
            url: format!("https://github.com/Microsoft/vscode/commit/{}", sha),
            message: message.to_owned(),
            author: login.to_owned(),
            author_url: Some(format!("https://github.com/{}", login)),
            avatar_url: Some(format!("https://avatars.githubusercontent.com/{}", login)),
        }
    }

    #[test]
    fn green() {
        let status = Status::Green {
            url: "https://ci.example.com/build/30".to_owned(),
        };
        let mut main = mount();
        render(&status, &mut main);

        let headers = main.elements_by_tag_name("header");
        assert_eq!(headers.len(), 1);
        assert!(headers[0].has_class("green"));

        let link = headers[0].elements_by_tag_name("a")[0];
        assert_eq!(link.attribute("href"), Some("https://ci.example.com/build/30"));
        assert_eq!(link.attribute("target"), Some("_blank"));
        assert_eq!(link.text_content(), "Build is green");

        assert!(main.elements_by_class_name("commits").is_empty());
        assert_eq!(main.child_elements().count(), 1);
    }

    #[test]
    fn broken_without_baseline() {
        let status = Status::Broken {
            url: "https://ci.example.com/build/30".to_owned(),
        };
        let mut main = mount();
        render(&status, &mut main);

        let headers = main.elements_by_tag_name("header");
        assert_eq!(headers.len(), 1);
        assert!(headers[0].has_class("red"));
        assert_eq!(headers[0].text_content(), "Build is broken");
        assert!(main.elements_by_class_name("commits").is_empty());
    }

    #[test]
    fn broken_with_commits() {
        let commits = vec![
            commit("1111", "alice", "fix: foo"),
            commit("2222", "bob", "feat: bar"),
            commit("3333", "carol", "chore: baz"),
        ];
        let status = Status::BrokenSince {
            url: "https://ci.example.com/build/30".to_owned(),
            commits: commits.clone(),
        };
        let mut main = mount();
        render(&status, &mut main);

        let list = main.elements_by_class_name("commits");
        assert_eq!(list.len(), 1);
        assert_eq!(
            list[0].elements_by_tag_name("p")[0].text_content(),
            "Potential first commits to break the build:"
        );

        let rows = main.elements_by_class_name("commit");
        assert_eq!(rows.len(), commits.len());

        for (row, commit) in rows.iter().zip(&commits) {
            let avatar = row.elements_by_class_name("avatar")[0];
            assert_eq!(avatar.tag(), "img");
            assert_eq!(avatar.attribute("src"), commit.avatar_url.as_deref());
            assert_eq!(avatar.attribute("width"), Some("20"));
            assert_eq!(avatar.attribute("height"), Some("20"));
            assert_eq!(avatar.attribute("alt").unwrap(), format!("@{}", commit.author));

            let author = row.elements_by_class_name("author")[0];
            assert_eq!(author.attribute("href"), commit.author_url.as_deref());
            assert_eq!(author.text_content(), commit.author);

            let message = row.elements_by_class_name("message")[0];
            assert_eq!(message.attribute("href"), Some(commit.url.as_str()));
            assert_eq!(message.text_content(), commit.message);
        }
    }

    #[test]
    fn commit_without_account() {
        let status = Status::BrokenSince {
            url: "https://ci.example.com/build/30".to_owned(),
            commits: vec![Commit {
                author_url: None,
                avatar_url: None,
                ..commit("1111", "Monalisa Octocat", "fix: foo")
            }],
        };
        let mut main = mount();
        render(&status, &mut main);

        let author = main.elements_by_class_name("author")[0];
        assert_eq!(author.tag(), "span");
        assert_eq!(author.text_content(), "Monalisa Octocat");
        assert!(main.elements_by_class_name("avatar").is_empty());
    }

    #[test]
    fn rendering_twice_appends() {
        let status = Status::Green {
            url: "https://ci.example.com/build/30".to_owned(),
        };
        let mut main = mount();
        render(&status, &mut main);
        render(&status, &mut main);
        assert_eq!(main.elements_by_tag_name("header").len(), 2);
    }
}
