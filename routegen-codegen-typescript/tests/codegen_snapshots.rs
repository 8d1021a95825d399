//! Snapshot tests for the generated route declaration.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use routegen_codegen::extract_routes;
use routegen_codegen_typescript::{Generator, LanguageCodegen};
use routegen_core::{Conventions, Route};

/// Extract routes from page paths and render them with default options.
fn render(files: &[&str]) -> String {
    let routes = extract_routes(files.iter().copied(), &Conventions::default());
    Generator::new(&routes).render()
}

/// The union portion of a rendered declaration.
fn union_of(code: &str) -> &str {
    let start = code.find("type ").expect("union not found");
    let end = code.find("\n\ndeclare module").expect("augmentations not found");
    &code[start..end]
}

#[test]
fn test_full_declaration() {
    let code = render(&[
        "pages/_app.tsx",
        "pages/index.tsx",
        "pages/about.tsx",
        "pages/posts/[id].tsx",
        "pages/docs/[[...slug]].tsx",
        "pages/blog/[...parts].tsx",
    ]);

    insta::assert_snapshot!(code, @r#"
    // THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
    // Run `routegen generate` to regenerate this file.

    type Routes =
      | { pathname: '/' }
      | '/'
      | { pathname: '/about' }
      | '/about'
      | { pathname: '/posts/[id]', query: { id: string; } }
      | { pathname: '/docs/[[...slug]]', query: { slug?: string[]; } }
      | { pathname: '/blog/[...parts]', query: { parts: string[]; } }

    declare module "next/link" {
      import type { LinkProps as NextLinkProps } from "next/link";
      import type { PropsWithChildren, MouseEventHandler } from "react";

      interface LinkProps extends Omit<NextLinkProps, "href"> {
        href: Routes;
      }

      declare function Link(
        props: PropsWithChildren<LinkProps>
      ): DetailedReactHTMLElement<
        {
          onMouseEnter?: MouseEventHandler<Element> | undefined;
          onClick: MouseEventHandler;
          href?: string | undefined;
          ref?: any;
        },
        HTMLElement
      >;

      export default Link;
    }

    declare module "next/router" {
      import type { NextRouter } from "next/router";

      type TransitionOptions = Parameters<NextRouter["push"]>[2];

      interface Router extends Omit<NextRouter, "push" | "replace"> {
        push(
          url: Routes,
          as?: Routes,
          options?: TransitionOptions
        ): Promise<boolean>;
        replace(
          url: Routes,
          as?: Routes,
          options?: TransitionOptions
        ): Promise<boolean>;
      }

      export function useRouter(): Router;
    }
    "#);
}

/// Inline snapshots trim trailing whitespace, so the file ending is pinned
/// separately. The router block's closing brace is followed by exactly one
/// newline and no trailing blank line, keeping the output stable under
/// editors and formatters that strip trailing blank lines.
#[test]
fn test_file_ends_with_single_newline() {
    let code = render(&["pages/index.tsx"]);
    assert!(code.ends_with("}\n"));
    assert!(!code.ends_with("\n\n"));
}

#[test]
fn test_nested_index_and_reindex() {
    let code = render(&["pages/blog/index.tsx", "pages/reindex.tsx"]);

    insta::assert_snapshot!(union_of(&code), @r"
    type Routes =
      | { pathname: '/blog/' }
      | '/blog/'
      | { pathname: '/re' }
      | '/re'
    ");
}

#[test]
fn test_repeated_param_keeps_one_field() {
    let code = render(&["pages/[id]/edit/[...id].tsx"]);

    insta::assert_snapshot!(union_of(&code), @r"
    type Routes =
      | { pathname: '/[id]/edit/[...id]', query: { id: string[]; } }
    ");
}

#[test]
fn test_file_in_non_routable_directory_is_emitted() {
    let code = render(&["pages/_components/button.tsx", "pages/_document.tsx"]);

    insta::assert_snapshot!(union_of(&code), @r"
    type Routes =
      | { pathname: '/_components/button' }
      | '/_components/button'
    ");
}

#[test]
fn test_only_non_routable_files_render_never() {
    let code = render(&["pages/_app.tsx", "pages/_document.tsx"]);
    assert_eq!(union_of(&code), "type Routes = never;");
}

#[test]
fn test_alternatives_follow_input_order() {
    let forward = render(&["pages/a.tsx", "pages/b.tsx"]);
    let reversed = render(&["pages/b.tsx", "pages/a.tsx"]);

    assert!(union_of(&forward).find("'/a'") < union_of(&forward).find("'/b'"));
    assert!(union_of(&reversed).find("'/b'") < union_of(&reversed).find("'/a'"));
}

#[test]
fn test_custom_type_name_and_output_path() {
    let routes = vec![Route::new("/")];
    let generator = Generator::new(&routes)
        .type_name("AppRoute")
        .output_path("types/routes.d.ts");

    let files = generator.preview();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "types/routes.d.ts");
    insta::assert_snapshot!(union_of(&files[0].content), @r"
    type AppRoute =
      | { pathname: '/' }
      | '/'
    ");
    assert!(files[0].content.contains("    href: AppRoute;\n"));
}
