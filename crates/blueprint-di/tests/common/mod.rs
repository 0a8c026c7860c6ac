#![allow(dead_code)]

use blueprint_di::{implements, Injectable, Ref, TypeDescriptor};

pub trait Dependency: Send + Sync {
    fn text(&self) -> Option<Ref<String>> {
        None
    }

    fn component(&self) -> Option<Ref<dyn Component>> {
        None
    }
}

impl Dependency for String {}

pub trait AnotherDependency: Send + Sync {}

pub trait Component: Send + Sync {
    fn dependency(&self) -> Option<Ref<dyn Dependency>> {
        None
    }

    fn test_string(&self) -> Option<&str> {
        None
    }

    /// How many times an injection method has run on this instance.
    fn injections(&self) -> usize {
        0
    }
}

// constructors

#[derive(Default)]
pub struct DefaultConstructorComponent;

impl Component for DefaultConstructorComponent {}

impl Injectable for DefaultConstructorComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor();
    }
}

pub struct CannotInstanceComponent {
    name: Ref<String>,
}

impl Component for CannotInstanceComponent {}

impl Injectable for CannotInstanceComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.constructor(|(name,): (Ref<String>,)| CannotInstanceComponent { name });
    }
}

#[derive(Default)]
pub struct AbstractComponent;

impl Component for AbstractComponent {}

impl Injectable for AbstractComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.abstract_type().default_constructor();
    }
}

pub struct MultipleInjectionConstructorComponent {
    dependency: Option<Ref<dyn Dependency>>,
}

impl Component for MultipleInjectionConstructorComponent {}

impl Injectable for MultipleInjectionConstructorComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|()| Self { dependency: None })
            .inject_constructor(|(dependency,): (Ref<dyn Dependency>,)| Self {
                dependency: Some(dependency),
            });
    }
}

pub struct InjectionConstructorComponent {
    dependency: Ref<dyn Dependency>,
}

impl Component for InjectionConstructorComponent {
    fn dependency(&self) -> Option<Ref<dyn Dependency>> {
        Some(self.dependency.clone())
    }
}

impl Injectable for InjectionConstructorComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.constructor(|(dependency,): (Ref<dyn Dependency>,)| Self { dependency })
            .inject_constructor(|(dependency,): (Ref<dyn Dependency>,)| Self { dependency });
    }
}

pub struct StringConstructorDependency {
    string: Ref<String>,
}

impl Dependency for StringConstructorDependency {
    fn text(&self) -> Option<Ref<String>> {
        Some(self.string.clone())
    }
}

impl Injectable for StringConstructorDependency {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|(string,): (Ref<String>,)| Self { string });
    }
}

pub struct DependencyDependOnComponent {
    component: Ref<dyn Component>,
}

impl Dependency for DependencyDependOnComponent {
    fn component(&self) -> Option<Ref<dyn Component>> {
        Some(self.component.clone())
    }
}

impl Injectable for DependencyDependOnComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|(component,): (Ref<dyn Component>,)| Self { component });
    }
}

pub struct DependencyDependOnAnotherDependency {
    another: Ref<dyn AnotherDependency>,
}

impl Dependency for DependencyDependOnAnotherDependency {}

impl Injectable for DependencyDependOnAnotherDependency {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|(another,): (Ref<dyn AnotherDependency>,)| Self { another });
    }
}

pub struct AnotherDependencyDependOnComponent {
    component: Ref<dyn Component>,
}

impl AnotherDependency for AnotherDependencyDependOnComponent {}

impl Injectable for AnotherDependencyDependOnComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|(component,): (Ref<dyn Component>,)| Self { component });
    }
}

// fields

#[derive(Default)]
pub struct ComponentDependOnDependencyFieldInjection {
    dependency: Option<Ref<dyn Dependency>>,
}

impl Component for ComponentDependOnDependencyFieldInjection {
    fn dependency(&self) -> Option<Ref<dyn Dependency>> {
        self.dependency.clone()
    }
}

impl Injectable for ComponentDependOnDependencyFieldInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor()
            .inject_field("dependency", |this: &mut Self, dependency: Ref<dyn Dependency>| {
                this.dependency = Some(dependency)
            });
    }
}

#[derive(Default)]
pub struct SubclassComponentDependOnDependencyFieldInjection {
    base: ComponentDependOnDependencyFieldInjection,
}

impl Component for SubclassComponentDependOnDependencyFieldInjection {
    fn dependency(&self) -> Option<Ref<dyn Dependency>> {
        self.base.dependency()
    }
}

impl Injectable for SubclassComponentDependOnDependencyFieldInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor().extends(|this: &mut Self| &mut this.base);
    }
}

pub struct ImmutableFieldComponent {
    dependency: Ref<dyn Dependency>,
}

impl Component for ImmutableFieldComponent {}

impl Injectable for ImmutableFieldComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|(dependency,): (Ref<dyn Dependency>,)| Self { dependency })
            .inject_immutable_field::<dyn Dependency>("dependency");
    }
}

pub struct SubclassOfImmutableFieldComponent {
    base: ImmutableFieldComponent,
}

impl Component for SubclassOfImmutableFieldComponent {}

impl Injectable for SubclassOfImmutableFieldComponent {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.inject_constructor(|(dependency,): (Ref<dyn Dependency>,)| Self {
            base: ImmutableFieldComponent { dependency },
        })
        .extends(|this: &mut Self| &mut this.base);
    }
}

#[derive(Default)]
pub struct DependencyDependOnComponentFieldInjection {
    component: Option<Ref<dyn Component>>,
}

impl Dependency for DependencyDependOnComponentFieldInjection {
    fn component(&self) -> Option<Ref<dyn Component>> {
        self.component.clone()
    }
}

impl Injectable for DependencyDependOnComponentFieldInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor()
            .inject_field("component", |this: &mut Self, component: Ref<dyn Component>| {
                this.component = Some(component)
            });
    }
}

// methods

#[derive(Default)]
pub struct ComponentDependOnDependencyMethodInjection {
    dependency: Option<Ref<dyn Dependency>>,
    calls: usize,
}

impl ComponentDependOnDependencyMethodInjection {
    pub fn set_dependency(&mut self, dependency: Ref<dyn Dependency>) {
        self.dependency = Some(dependency);
        self.calls += 1;
    }
}

impl Component for ComponentDependOnDependencyMethodInjection {
    fn dependency(&self) -> Option<Ref<dyn Dependency>> {
        self.dependency.clone()
    }

    fn injections(&self) -> usize {
        self.calls
    }
}

impl Injectable for ComponentDependOnDependencyMethodInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor().inject_method(
            "set_dependency",
            |this: &mut Self, (dependency,): (Ref<dyn Dependency>,)| this.set_dependency(dependency),
        );
    }
}

#[derive(Default)]
pub struct OverrideComponentDependOnDependencyMethodInjection {
    base: ComponentDependOnDependencyMethodInjection,
    test_string: Option<String>,
}

impl Component for OverrideComponentDependOnDependencyMethodInjection {
    fn dependency(&self) -> Option<Ref<dyn Dependency>> {
        self.base.dependency()
    }

    fn test_string(&self) -> Option<&str> {
        self.test_string.as_deref()
    }

    fn injections(&self) -> usize {
        self.base.injections()
    }
}

impl Injectable for OverrideComponentDependOnDependencyMethodInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor()
            .method(
                "set_dependency",
                |this: &mut Self, (dependency,): (Ref<dyn Dependency>,)| {
                    this.base.set_dependency(dependency);
                    this.test_string = Some("this is a override test string".to_string());
                },
            )
            .extends(|this: &mut Self| &mut this.base);
    }
}

#[derive(Default)]
pub struct NoParameterComponentMethodInjection {
    test_string: Option<String>,
    calls: usize,
}

impl Component for NoParameterComponentMethodInjection {
    fn test_string(&self) -> Option<&str> {
        self.test_string.as_deref()
    }

    fn injections(&self) -> usize {
        self.calls
    }
}

impl Injectable for NoParameterComponentMethodInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor()
            .inject_method("set_test_string", |this: &mut Self, ()| {
                this.test_string = Some("this is a test string".to_string());
                this.calls += 1;
            });
    }
}

#[derive(Default)]
pub struct DependencyDependOnComponentMethodInjection {
    component: Option<Ref<dyn Component>>,
}

impl Dependency for DependencyDependOnComponentMethodInjection {
    fn component(&self) -> Option<Ref<dyn Component>> {
        self.component.clone()
    }
}

impl Injectable for DependencyDependOnComponentMethodInjection {
    fn describe(ty: &mut TypeDescriptor<Self>) {
        ty.default_constructor().inject_method(
            "set_component",
            |this: &mut Self, (component,): (Ref<dyn Component>,)| this.component = Some(component),
        );
    }
}

implements!(DefaultConstructorComponent: dyn Component);
implements!(CannotInstanceComponent: dyn Component);
implements!(AbstractComponent: dyn Component);
implements!(MultipleInjectionConstructorComponent: dyn Component);
implements!(InjectionConstructorComponent: dyn Component);
implements!(ComponentDependOnDependencyFieldInjection: dyn Component);
implements!(SubclassComponentDependOnDependencyFieldInjection: dyn Component);
implements!(ImmutableFieldComponent: dyn Component);
implements!(SubclassOfImmutableFieldComponent: dyn Component);
implements!(ComponentDependOnDependencyMethodInjection: dyn Component);
implements!(OverrideComponentDependOnDependencyMethodInjection: dyn Component);
implements!(NoParameterComponentMethodInjection: dyn Component);

implements!(StringConstructorDependency: dyn Dependency);
implements!(DependencyDependOnComponent: dyn Dependency);
implements!(DependencyDependOnAnotherDependency: dyn Dependency);
implements!(DependencyDependOnComponentFieldInjection: dyn Dependency);
implements!(DependencyDependOnComponentMethodInjection: dyn Dependency);

implements!(AnotherDependencyDependOnComponent: dyn AnotherDependency);
